//! Venue handlers

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use marquee_core::{FormData, VenueForm};
use tracing::error;

use super::{render, AppError, SearchForm};
use crate::extractors::{Flash, FlashRedirect};
use crate::views::{self, forms::FormTarget, Section};
use crate::AppState;

pub async fn listing(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let groups = state.venues.grouped_listing().await?;
    Ok(render(flash, "Venues", Section::Venues, views::venues::listing(&groups)))
}

pub async fn search(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let results = state.venues.search(&form.search_term).await?;
    Ok(render(
        flash,
        "Venue search",
        Section::Venues,
        views::venues::search_results(&results),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let detail = state.venues.detail(id).await?;
    let title = detail.venue.name.clone();
    Ok(render(flash, &title, Section::Venues, views::venues::detail(&detail)))
}

pub async fn create_form(flash: Flash) -> Response {
    let target = FormTarget::create("Venue", "/venues/create");
    render(
        flash,
        "New venue",
        Section::Venues,
        views::forms::venue_form(&target, &VenueForm::default()),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = VenueForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(FlashRedirect::to("/venues/create").notices(errors.notices())),
    };

    match state.venues.create(&input).await {
        Ok(_) => Ok(FlashRedirect::to("/venues")
            .notice(format!("Venue {} was successfully listed!", input.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to create venue {}: {}", input.name, e);
            Ok(FlashRedirect::to("/venues").notice(format!(
                "An error occurred. Venue {} could not be listed.",
                input.name
            )))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let venue = state.venues.get(id).await?;
    let target = FormTarget::edit(&venue.name, format!("/venues/{}/edit", id));
    let body = views::forms::venue_form(&target, &VenueForm::from_input(&venue.to_input()));
    Ok(render(flash, "Edit venue", Section::Venues, body))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = VenueForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(FlashRedirect::to(format!("/venues/{}/edit", id)).notices(errors.notices()))
        }
    };

    let back = format!("/venues/{}", id);
    match state.venues.update(id, &input).await {
        Ok(()) => Ok(FlashRedirect::to(back)
            .notice(format!("Venue {} was successfully updated!", input.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to update venue {}: {}", id, e);
            Ok(FlashRedirect::to(back).notice(format!(
                "An error occurred. Venue {} could not be updated.",
                input.name
            )))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<FlashRedirect, AppError> {
    match state.venues.delete(id).await {
        Ok(venue) => Ok(FlashRedirect::to("/").notice(format!("{} is deleted successfully", venue.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to delete venue {}: {}", id, e);
            Ok(FlashRedirect::to(format!("/venues/{}", id))
                .notice("An error occurred. Venue could not be deleted."))
        }
        Err(e) => Err(e.into()),
    }
}

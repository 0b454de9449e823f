//! Artist handlers

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use marquee_core::{FormData, ArtistForm};
use tracing::error;

use super::{render, AppError, SearchForm};
use crate::extractors::{Flash, FlashRedirect};
use crate::views::{self, forms::FormTarget, Section};
use crate::AppState;

pub async fn listing(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let artists = state.artists.list().await?;
    Ok(render(flash, "Artists", Section::Artists, views::artists::listing(&artists)))
}

pub async fn search(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let results = state.artists.search(&form.search_term).await?;
    Ok(render(
        flash,
        "Artist search",
        Section::Artists,
        views::artists::search_results(&results),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let detail = state.artists.detail(id).await?;
    let title = detail.artist.name.clone();
    Ok(render(flash, &title, Section::Artists, views::artists::detail(&detail)))
}

pub async fn create_form(flash: Flash) -> Response {
    let target = FormTarget::create("Artist", "/artists/create");
    render(
        flash,
        "New artist",
        Section::Artists,
        views::forms::artist_form(&target, &ArtistForm::default()),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = ArtistForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(FlashRedirect::to("/artists/create").notices(errors.notices())),
    };

    match state.artists.create(&input).await {
        Ok(_) => Ok(FlashRedirect::to("/")
            .notice(format!("Artist {} was successfully listed!", input.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to create artist {}: {}", input.name, e);
            Ok(FlashRedirect::to("/").notice(format!(
                "An error occurred. Artist {} could not be listed.",
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
    let artist = state.artists.get(id).await?;
    let target = FormTarget::edit(&artist.name, format!("/artists/{}/edit", id));
    let body = views::forms::artist_form(&target, &ArtistForm::from_input(&artist.to_input()));
    Ok(render(flash, "Edit artist", Section::Artists, body))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = ArtistForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(FlashRedirect::to(format!("/artists/{}/edit", id)).notices(errors.notices()))
        }
    };

    let back = format!("/artists/{}", id);
    match state.artists.update(id, &input).await {
        Ok(()) => Ok(FlashRedirect::to(back)
            .notice(format!("Artist {} was successfully updated!", input.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to update artist {}: {}", id, e);
            Ok(FlashRedirect::to(back).notice(format!(
                "An error occurred. Artist {} could not be updated.",
                input.name
            )))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<FlashRedirect, AppError> {
    match state.artists.delete(id).await {
        Ok(artist) => Ok(FlashRedirect::to("/").notice(format!("{} is deleted successfully", artist.name))),
        Err(e) if e.is_store_failure() => {
            error!("Failed to delete artist {}: {}", id, e);
            Ok(FlashRedirect::to(format!("/artists/{}", id))
                .notice("An error occurred. Artist could not be deleted."))
        }
        Err(e) => Err(e.into()),
    }
}

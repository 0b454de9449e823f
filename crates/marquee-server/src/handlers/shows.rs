//! Show handlers

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use marquee_core::{FormData, ShowForm};
use tracing::error;

use super::{render, AppError, SearchForm};
use crate::extractors::{Flash, FlashRedirect};
use crate::views::{self, forms::FormTarget, Section};
use crate::AppState;

pub async fn listing(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let shows = state.shows.list().await?;
    Ok(render(flash, "Shows", Section::Shows, views::shows::listing(&shows)))
}

/// Only upcoming shows are searchable
pub async fn search(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let results = state.shows.search(&form.search_term).await?;
    Ok(render(
        flash,
        "Show search",
        Section::Shows,
        views::shows::search_results(&results),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let detail = state.shows.detail(id).await?;
    Ok(render(flash, "Show", Section::Shows, views::shows::detail(&detail)))
}

pub async fn create_form(State(state): State<AppState>, flash: Flash) -> Response {
    let form = ShowForm {
        start_time: state.clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ..Default::default()
    };
    let target = FormTarget::create("Show", "/shows/create");
    render(flash, "New show", Section::Shows, views::forms::show_form(&target, &form))
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = ShowForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(FlashRedirect::to("/shows/create").notices(errors.notices())),
    };

    match state.shows.create(&input).await {
        Ok(_) => Ok(FlashRedirect::to("/").notice("Show was successfully listed!")),
        Err(e) if e.is_store_failure() => {
            error!("Failed to create show: {}", e);
            Ok(FlashRedirect::to("/").notice("An error occurred. Show could not be listed."))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let show = state.shows.get(id).await?;
    let target = FormTarget::edit("show", format!("/shows/{}/edit", id));
    let body = views::forms::show_form(&target, &ShowForm::from_input(&show.to_input()));
    Ok(render(flash, "Edit show", Section::Shows, body))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, AppError> {
    let form = ShowForm::from_data(&FormData::from(pairs));
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(FlashRedirect::to(format!("/shows/{}/edit", id)).notices(errors.notices()))
        }
    };

    let back = format!("/shows/{}", id);
    match state.shows.update(id, &input).await {
        Ok(()) => Ok(FlashRedirect::to(back).notice("Show was successfully updated!")),
        Err(e) if e.is_store_failure() => {
            error!("Failed to update show {}: {}", id, e);
            Ok(FlashRedirect::to(back).notice("An error occurred. Show could not be updated."))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<FlashRedirect, AppError> {
    match state.shows.delete(id).await {
        Ok(_) => Ok(FlashRedirect::to("/shows").notice("Show is deleted successfully")),
        Err(e) if e.is_store_failure() => {
            error!("Failed to delete show {}: {}", id, e);
            Ok(FlashRedirect::to(format!("/shows/{}", id))
                .notice("An error occurred. Show could not be deleted."))
        }
        Err(e) => Err(e.into()),
    }
}

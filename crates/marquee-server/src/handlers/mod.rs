//! HTTP handlers

pub mod artists;
pub mod error;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::extractors::Flash;
use crate::views::{self, Section};

pub use error::AppError;

/// Body of the navbar search forms
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found(flash: Flash) -> Response {
    let html = views::layout::page("Not found", Section::Home, flash.messages(), &views::errors::not_found());
    (StatusCode::NOT_FOUND, flash, Html(html)).into_response()
}

/// Render a page inside the layout, consuming any pending notices
pub(crate) fn render(flash: Flash, title: &str, section: Section, body: String) -> Response {
    let html = views::layout::page(title, section, flash.messages(), &body);
    (flash, Html(html)).into_response()
}

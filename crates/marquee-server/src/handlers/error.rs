//! Errors that end a request with an error page

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use marquee_core::DirectoryError;
use thiserror::Error;
use tracing::{error, warn};

use crate::views::{self, Section};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::NotFound { .. } => AppError::NotFound(e.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, body) = match &self {
            AppError::NotFound(detail) => {
                warn!("{}", detail);
                (StatusCode::NOT_FOUND, "Not found", views::errors::not_found())
            }
            AppError::Internal(detail) => {
                error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    views::errors::server_error(),
                )
            }
        };
        let html = views::layout::page(title, Section::Home, &[], &body);
        (status, Html(html)).into_response()
    }
}

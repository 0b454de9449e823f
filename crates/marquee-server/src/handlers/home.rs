//! Landing page handler

use axum::{extract::State, response::Response};
use marquee_core::HomeFeed;

use super::{render, AppError};
use crate::extractors::Flash;
use crate::views::{self, Section};
use crate::AppState;

const RECENT_SHOWS: i64 = 5;
const RECENT_ARTISTS: i64 = 10;
const RECENT_VENUES: i64 = 10;

pub async fn index(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let feed = HomeFeed {
        shows: state.shows.recent(RECENT_SHOWS).await?,
        artists: state.artists.recent(RECENT_ARTISTS).await?,
        venues: state.venues.recent(RECENT_VENUES).await?,
    };
    Ok(render(flash, "Home", Section::Home, views::home::home(&feed)))
}

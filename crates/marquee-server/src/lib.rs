//! Marquee server
//!
//! HTML front end for the venue, artist and show directory. The binary in
//! `main.rs` wires configuration, logging and the SQLite store around the
//! router built here; tests drive the same router with an in-memory store.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod services;
pub mod storage;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use marquee_core::{Clock, DirectoryStore};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use services::{ArtistDirectory, ShowDirectory, VenueDirectory};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub venues: Arc<VenueDirectory>,
    pub artists: Arc<ArtistDirectory>,
    pub shows: Arc<ShowDirectory>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn DirectoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            venues: Arc::new(VenueDirectory::new(store.clone(), clock.clone())),
            artists: Arc::new(ArtistDirectory::new(store.clone(), clock.clone())),
            shows: Arc::new(ShowDirectory::new(store, clock.clone())),
            clock,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

fn venue_routes() -> Router<AppState> {
    use handlers::venues;

    Router::new()
        .route("/venues", get(venues::listing))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create),
        )
        .route("/venues/:id", get(venues::detail).post(venues::delete))
        .route("/venues/:id/edit", get(venues::edit_form).post(venues::edit))
}

fn artist_routes() -> Router<AppState> {
    use handlers::artists;

    Router::new()
        .route("/artists", get(artists::listing))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create),
        )
        .route("/artists/:id", get(artists::detail).post(artists::delete))
        .route(
            "/artists/:id/edit",
            get(artists::edit_form).post(artists::edit),
        )
}

fn show_routes() -> Router<AppState> {
    use handlers::shows;

    Router::new()
        .route("/shows", get(shows::listing))
        .route("/shows/search", post(shows::search))
        .route("/shows/create", get(shows::create_form).post(shows::create))
        .route("/shows/:id", get(shows::detail).post(shows::delete))
        .route("/shows/:id/edit", get(shows::edit_form).post(shows::edit))
}

//! Shared fixtures for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use marquee_core::{ArtistInput, FixedClock, ShowInput, VenueInput};
use marquee_server::storage::Database;
use marquee_server::AppState;
use std::sync::Arc;

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// The instant every test treats as "now"
pub fn now() -> NaiveDateTime {
    at(2024, 6, 1, 12, 0)
}

pub async fn setup() -> (Arc<Database>, AppState) {
    let db = Arc::new(Database::in_memory().await.expect("Should open in-memory database"));
    let state = AppState::new(db.clone(), Arc::new(FixedClock(now())));
    (db, state)
}

pub fn venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}

pub fn artist(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

pub fn show(artist_id: i64, venue_id: i64, start_time: NaiveDateTime) -> ShowInput {
    ShowInput {
        name: None,
        start_time,
        artist_id,
        venue_id,
    }
}

//! Show form

use super::rules::{self, MAX_TEXT};
use super::{non_blank, FieldErrors, FormData};
use chrono::NaiveDateTime;
use marquee_types::ShowInput;

/// Accepted start time layouts; the last one is what `datetime-local` sends
const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

pub const INVALID_DATETIME: &str = "Not a valid datetime value.";
pub const INVALID_ID: &str = "Not a valid integer value.";

/// Raw show submission, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub name: String,
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    pub fn from_input(input: &ShowInput) -> Self {
        Self {
            name: input.name.clone().unwrap_or_default(),
            artist_id: input.artist_id.to_string(),
            venue_id: input.venue_id.to_string(),
            start_time: input.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn validate(&self) -> Result<ShowInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        rules::max_len(&mut errors, "name", &self.name, MAX_TEXT);
        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = parse_start_time(&mut errors, "start_time", &self.start_time);

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(ShowInput {
                name: non_blank(&self.name),
                start_time,
                artist_id,
                venue_id,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut FieldErrors, field: &str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, rules::REQUIRED);
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, INVALID_ID);
            None
        }
    }
}

pub fn parse_start_time(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        errors.add(field, rules::REQUIRED);
        return None;
    }
    let parsed = START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
    if parsed.is_none() {
        errors.add(field, INVALID_DATETIME);
    }
    parsed
}

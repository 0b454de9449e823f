//! Show types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled event linking one artist to one venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub name: Option<String>,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub venue_id: i64,
}

/// Every mutable show field, as written by create and edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInput {
    pub name: Option<String>,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub venue_id: i64,
}

impl Show {
    pub fn to_input(&self) -> ShowInput {
        ShowInput {
            name: self.name.clone(),
            start_time: self.start_time,
            artist_id: self.artist_id,
            venue_id: self.venue_id,
        }
    }
}

/// Derived classification of a show relative to an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl std::fmt::Display for ShowTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowTiming::Past => write!(f, "past"),
            ShowTiming::Upcoming => write!(f, "upcoming"),
        }
    }
}

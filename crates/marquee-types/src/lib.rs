//! Marquee Types - Pure type definitions
//!
//! Records stored by the booking directory (venues, artists, shows) and the
//! read projections the query layer hands to the presentation layer. This
//! crate has no runtime dependencies.

pub mod artist;
pub mod listing;
pub mod show;
pub mod venue;

pub use artist::*;
pub use listing::*;
pub use show::*;
pub use venue::*;

use serde::{Deserialize, Serialize};

/// The three record kinds held by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Venue,
    Artist,
    Show,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Venue => write!(f, "Venue"),
            RecordKind::Artist => write!(f, "Artist"),
            RecordKind::Show => write!(f, "Show"),
        }
    }
}

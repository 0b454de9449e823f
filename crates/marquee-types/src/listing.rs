//! Read projections produced by the query layer
//!
//! These are the shapes the presentation layer renders. They are denormalized
//! on purpose: a page never resolves a foreign key on its own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Artist, Show, Venue};

/// A venue or artist with its freshly computed upcoming-show count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub id: i64,
    pub name: String,
    pub upcoming_shows_count: usize,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
    /// Sum of the upcoming counts of every venue in the group
    pub upcoming_shows_count: usize,
}

/// Result of a name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(search_term: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            search_term: search_term.into(),
            count: data.len(),
            data,
        }
    }
}

/// Shows split around an instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> Partitioned<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// A show seen from its venue: who plays and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedArtist {
    pub show_id: i64,
    pub show_name: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show seen from its artist: where it plays and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedVenue {
    pub show_id: i64,
    pub show_name: Option<String>,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Venue page: the record plus its shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: Partitioned<BookedArtist>,
}

/// Artist page: the record plus its shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub shows: Partitioned<BookedVenue>,
}

/// One row of the show listing (show joined with venue and artist)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub id: i64,
    pub show_name: Option<String>,
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Show page: the show with both endpoints fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDetail {
    pub show: Show,
    pub artist: Artist,
    pub venue: Venue,
}

/// Landing page content, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeFeed {
    pub shows: Vec<ShowListing>,
    pub artists: Vec<Artist>,
    pub venues: Vec<Venue>,
}

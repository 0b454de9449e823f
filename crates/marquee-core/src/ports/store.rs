//! Storage traits for persistence
//!
//! Every write runs as a single all-or-nothing transaction inside the
//! implementation. Writes against an unknown id fail with `NotFound`.

use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use marquee_types::{
    Artist, ArtistInput, ArtistSummary, BookedArtist, BookedVenue, Show, ShowInput, ShowListing,
    Venue, VenueInput,
};

/// Venue store
#[async_trait]
pub trait VenueStore: Send + Sync {
    async fn create_venue(&self, input: &VenueInput) -> Result<i64>;
    async fn update_venue(&self, id: i64, input: &VenueInput) -> Result<()>;
    /// Deletes the venue and its shows, returning the removed record
    async fn delete_venue(&self, id: i64) -> Result<Venue>;
    async fn get_venue(&self, id: i64) -> Result<Option<Venue>>;
    /// All venues in id order
    async fn list_venues(&self) -> Result<Vec<Venue>>;
    async fn recent_venues(&self, limit: i64) -> Result<Vec<Venue>>;
    /// Case-insensitive substring match on name
    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>>;
    async fn count_venues(&self) -> Result<i64>;
}

/// Artist store
#[async_trait]
pub trait ArtistStore: Send + Sync {
    async fn create_artist(&self, input: &ArtistInput) -> Result<i64>;
    async fn update_artist(&self, id: i64, input: &ArtistInput) -> Result<()>;
    /// Deletes the artist and its shows, returning the removed record
    async fn delete_artist(&self, id: i64) -> Result<Artist>;
    async fn get_artist(&self, id: i64) -> Result<Option<Artist>>;
    /// Id and name of every artist, sorted by name
    async fn list_artist_summaries(&self) -> Result<Vec<ArtistSummary>>;
    async fn recent_artists(&self, limit: i64) -> Result<Vec<Artist>>;
    /// Case-insensitive substring match on name
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>>;
    async fn count_artists(&self) -> Result<i64>;
}

/// Show store
#[async_trait]
pub trait ShowStore: Send + Sync {
    async fn create_show(&self, input: &ShowInput) -> Result<i64>;
    async fn update_show(&self, id: i64, input: &ShowInput) -> Result<()>;
    async fn delete_show(&self, id: i64) -> Result<Show>;
    async fn get_show(&self, id: i64) -> Result<Option<Show>>;
    /// Every show joined with its venue and artist
    async fn list_shows(&self) -> Result<Vec<ShowListing>>;
    async fn recent_shows(&self, limit: i64) -> Result<Vec<ShowListing>>;
    /// Shows whose own, artist or venue name contains the term
    async fn search_shows(&self, term: &str) -> Result<Vec<ShowListing>>;
    async fn shows_at_venue(&self, venue_id: i64) -> Result<Vec<BookedArtist>>;
    async fn shows_by_artist(&self, artist_id: i64) -> Result<Vec<BookedVenue>>;
    /// (venue_id, start_time) for every show at the given venues
    async fn venue_show_times(&self, venue_ids: &[i64]) -> Result<Vec<(i64, NaiveDateTime)>>;
    /// (artist_id, start_time) for every show by the given artists
    async fn artist_show_times(&self, artist_ids: &[i64]) -> Result<Vec<(i64, NaiveDateTime)>>;
    async fn count_shows(&self) -> Result<i64>;
}

/// Everything the query layer needs from one backing store
pub trait DirectoryStore: VenueStore + ArtistStore + ShowStore {}

impl<T> DirectoryStore for T where T: VenueStore + ArtistStore + ShowStore {}

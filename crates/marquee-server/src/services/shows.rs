//! Show directory service

use marquee_core::timing::is_upcoming;
use marquee_core::{
    Clock, DirectoryError, DirectoryStore, RecordKind, Result, SearchResults, Show, ShowDetail,
    ShowInput, ShowListing,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ShowDirectory {
    store: Arc<dyn DirectoryStore>,
    clock: Arc<dyn Clock>,
}

impl ShowDirectory {
    pub fn new(store: Arc<dyn DirectoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn list(&self) -> Result<Vec<ShowListing>> {
        self.store.list_shows().await
    }

    /// Upcoming shows whose own, artist or venue name contains `term`
    pub async fn search(&self, term: &str) -> Result<SearchResults<ShowListing>> {
        let now = self.clock.now();
        let shows: Vec<ShowListing> = self
            .store
            .search_shows(term)
            .await?
            .into_iter()
            .filter(|show| is_upcoming(show.start_time, now))
            .collect();

        debug!("Show search for {:?}: {} upcoming", term, shows.len());
        Ok(SearchResults::new(term, shows))
    }

    pub async fn get(&self, id: i64) -> Result<Show> {
        self.store
            .get_show(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(RecordKind::Show, id))
    }

    pub async fn detail(&self, id: i64) -> Result<ShowDetail> {
        let show = self.get(id).await?;

        // Both endpoints must resolve; a dangling show is reported as missing
        let artist = self.store.get_artist(show.artist_id).await?;
        let venue = self.store.get_venue(show.venue_id).await?;
        match (artist, venue) {
            (Some(artist), Some(venue)) => Ok(ShowDetail { show, artist, venue }),
            _ => {
                warn!("Show {} has an unresolved artist or venue", id);
                Err(DirectoryError::not_found(RecordKind::Show, id))
            }
        }
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<ShowListing>> {
        self.store.recent_shows(limit).await
    }

    pub async fn create(&self, input: &ShowInput) -> Result<i64> {
        info!(
            "Creating show: artist={}, venue={}, start={}",
            input.artist_id, input.venue_id, input.start_time
        );
        let id = self.store.create_show(input).await?;
        info!("Show {} listed", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &ShowInput) -> Result<()> {
        info!("Updating show {}", id);
        self.store.update_show(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<Show> {
        info!("Deleting show: {}", id);
        self.store.delete_show(id).await
    }
}

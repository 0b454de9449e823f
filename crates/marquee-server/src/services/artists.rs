//! Artist directory service

use marquee_core::timing::{partition, upcoming_counts};
use marquee_core::{
    Artist, ArtistDetail, ArtistInput, ArtistSummary, Clock, DirectoryError, DirectoryStore,
    ListingEntry, RecordKind, Result, SearchResults,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ArtistDirectory {
    store: Arc<dyn DirectoryStore>,
    clock: Arc<dyn Clock>,
}

impl ArtistDirectory {
    pub fn new(store: Arc<dyn DirectoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Id and name of every artist, by name
    pub async fn list(&self) -> Result<Vec<ArtistSummary>> {
        self.store.list_artist_summaries().await
    }

    pub async fn search(&self, term: &str) -> Result<SearchResults<ListingEntry>> {
        let artists = self.store.search_artists(term).await?;
        let ids: Vec<i64> = artists.iter().map(|a| a.id).collect();
        let times = self.store.artist_show_times(&ids).await?;
        let counts = upcoming_counts(&times, self.clock.now());

        let entries = artists
            .into_iter()
            .map(|a| ListingEntry {
                upcoming_shows_count: counts.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.name,
            })
            .collect();

        debug!("Artist search for {:?}", term);
        Ok(SearchResults::new(term, entries))
    }

    pub async fn get(&self, id: i64) -> Result<Artist> {
        self.store
            .get_artist(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(RecordKind::Artist, id))
    }

    pub async fn detail(&self, id: i64) -> Result<ArtistDetail> {
        let artist = self.get(id).await?;
        let booked = self.store.shows_by_artist(id).await?;
        let shows = partition(booked, self.clock.now(), |show| show.start_time);

        Ok(ArtistDetail { artist, shows })
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<Artist>> {
        self.store.recent_artists(limit).await
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<i64> {
        info!("Creating artist: name={}, city={}, state={}", input.name, input.city, input.state);
        let id = self.store.create_artist(input).await?;
        info!("Artist {} listed", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &ArtistInput) -> Result<()> {
        info!("Updating artist {}: name={}", id, input.name);
        self.store.update_artist(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<Artist> {
        info!("Deleting artist: {}", id);
        self.store.delete_artist(id).await
    }
}

//! Venue directory service

use marquee_core::timing::{partition, upcoming_counts};
use marquee_core::{
    group_by_location, Clock, DirectoryError, DirectoryStore, ListingEntry, LocationGroup,
    RecordKind, Result, SearchResults, Venue, VenueDetail, VenueInput,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct VenueDirectory {
    store: Arc<dyn DirectoryStore>,
    clock: Arc<dyn Clock>,
}

impl VenueDirectory {
    pub fn new(store: Arc<dyn DirectoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Every venue, grouped by (city, state)
    pub async fn grouped_listing(&self) -> Result<Vec<LocationGroup>> {
        let venues = self.store.list_venues().await?;
        let ids: Vec<i64> = venues.iter().map(|v| v.id).collect();
        let times = self.store.venue_show_times(&ids).await?;
        let counts = upcoming_counts(&times, self.clock.now());

        let groups = group_by_location(&venues, &counts);
        debug!("Listed {} venues in {} locations", venues.len(), groups.len());
        Ok(groups)
    }

    pub async fn search(&self, term: &str) -> Result<SearchResults<ListingEntry>> {
        let venues = self.store.search_venues(term).await?;
        let ids: Vec<i64> = venues.iter().map(|v| v.id).collect();
        let times = self.store.venue_show_times(&ids).await?;
        let counts = upcoming_counts(&times, self.clock.now());

        let entries = venues
            .into_iter()
            .map(|v| ListingEntry {
                upcoming_shows_count: counts.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            })
            .collect();

        debug!("Venue search for {:?}", term);
        Ok(SearchResults::new(term, entries))
    }

    pub async fn get(&self, id: i64) -> Result<Venue> {
        self.store
            .get_venue(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(RecordKind::Venue, id))
    }

    pub async fn detail(&self, id: i64) -> Result<VenueDetail> {
        let venue = self.get(id).await?;
        let booked = self.store.shows_at_venue(id).await?;
        let shows = partition(booked, self.clock.now(), |show| show.start_time);

        Ok(VenueDetail { venue, shows })
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<Venue>> {
        self.store.recent_venues(limit).await
    }

    pub async fn create(&self, input: &VenueInput) -> Result<i64> {
        info!("Creating venue: name={}, city={}, state={}", input.name, input.city, input.state);
        let id = self.store.create_venue(input).await?;
        info!("Venue {} listed", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &VenueInput) -> Result<()> {
        info!("Updating venue {}: name={}", id, input.name);
        self.store.update_venue(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<Venue> {
        info!("Deleting venue: {}", id);
        self.store.delete_venue(id).await
    }
}

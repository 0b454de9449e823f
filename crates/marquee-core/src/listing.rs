//! Grouped venue listing

use marquee_types::{ListingEntry, LocationGroup, Venue};
use std::collections::HashMap;

/// Group venues by (city, state).
///
/// Groups appear in the order their first venue appears in `venues`, and
/// venues keep their input order within a group. A group's upcoming count is
/// the sum over all of its venues.
pub fn group_by_location(venues: &[Venue], upcoming: &HashMap<i64, usize>) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let count = upcoming.get(&venue.id).copied().unwrap_or(0);
        let entry = ListingEntry {
            id: venue.id,
            name: venue.name.clone(),
            upcoming_shows_count: count,
        };

        let key = (venue.city.as_str(), venue.state.as_str());
        match index.get(&key) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.upcoming_shows_count += count;
                group.venues.push(entry);
            }
            None => {
                index.insert(key, groups.len());
                groups.push(LocationGroup {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![entry],
                    upcoming_shows_count: count,
                });
            }
        }
    }

    groups
}

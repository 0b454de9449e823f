//! Past/upcoming classification of shows
//!
//! One boundary rule is used everywhere: a show is past iff it started
//! strictly before `now`, and upcoming otherwise. A show starting exactly at
//! `now` is upcoming.

use chrono::NaiveDateTime;
use marquee_types::{Partitioned, ShowTiming};
use std::collections::HashMap;

/// Classify a show start time against `now`
pub fn classify(start_time: NaiveDateTime, now: NaiveDateTime) -> ShowTiming {
    if start_time < now {
        ShowTiming::Past
    } else {
        ShowTiming::Upcoming
    }
}

pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    classify(start_time, now) == ShowTiming::Upcoming
}

/// Split items into past and upcoming, keeping their relative order
pub fn partition<T, F>(items: impl IntoIterator<Item = T>, now: NaiveDateTime, start_of: F) -> Partitioned<T>
where
    F: Fn(&T) -> NaiveDateTime,
{
    let mut split = Partitioned::default();
    for item in items {
        match classify(start_of(&item), now) {
            ShowTiming::Past => split.past.push(item),
            ShowTiming::Upcoming => split.upcoming.push(item),
        }
    }
    split
}

/// Count upcoming shows per owner id from (owner_id, start_time) pairs
pub fn upcoming_counts(times: &[(i64, NaiveDateTime)], now: NaiveDateTime) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for (owner, start_time) in times {
        if is_upcoming(*start_time, now) {
            *counts.entry(*owner).or_insert(0) += 1;
        }
    }
    counts
}

//! Port traits (interfaces) for dependency injection

pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{ArtistStore, DirectoryStore, ShowStore, VenueStore};

//! Marquee Core Library
//!
//! Domain logic for the booking directory: the error taxonomy, the store and
//! clock ports the query layer is written against, show time partitioning,
//! grouped listings and form validation. Nothing in here performs I/O.

// Re-export pure types from marquee-types
pub use marquee_types::*;

pub mod error;
pub mod forms;
pub mod listing;
pub mod ports;
pub mod timing;

pub use error::{DirectoryError, Result};
pub use forms::{ArtistForm, FieldErrors, FormData, ShowForm, VenueForm};
pub use listing::group_by_location;
pub use ports::{ArtistStore, Clock, DirectoryStore, FixedClock, ShowStore, SystemClock, VenueStore};
pub use timing::{classify, partition};

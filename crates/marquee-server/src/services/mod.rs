//! Query layer services
//!
//! Each service owns a handle to the store and the clock. Reads compute the
//! past/upcoming split against one `now` taken per call; writes pass straight
//! through to the store, which runs them transactionally.

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::ArtistDirectory;
pub use shows::ShowDirectory;
pub use venues::VenueDirectory;

//! Request extractors and redirect helpers

pub mod flash;

pub use flash::{Flash, FlashRedirect};

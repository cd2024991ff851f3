// Primate Paradise - Core Library
// Exposes the enclosure store and primate behavior for the console shell and tests

pub mod behavior;
pub mod enclosure;
pub mod primate;

// Re-export commonly used types
pub use behavior::{Effect, Outcome, PHOTO_FILE};
pub use enclosure::{Enclosure, EnclosureError};
pub use primate::{Food, Group, GroupInfo, Primate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

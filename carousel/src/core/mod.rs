//! Pure draw logic: generation, cycle ordering, exclusion bookkeeping.
//!
//! Core modules are free of I/O side effects. They operate on the snapshot of
//! names and exclusions passed in; randomness comes only from the caller's RNG.

pub mod chains;
pub mod error;
pub mod exclusions;
pub mod generator;
pub mod merge;
pub mod names;
pub mod record;
pub mod types;

pub use error::DrawError;
pub use exclusions::ExclusionMap;
pub use types::{Assignment, Pairing, Participant};

pub mod coerce;
pub mod identifiers;

pub use identifiers::{MovieId, StorageKey};

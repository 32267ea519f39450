//! Core library for tescan.
//!
//! Provides the interval data model ([`models::Region`]), a replayable
//! BED-like input source ([`models::BedSource`]), and the shared error
//! type for input handling ([`errors::BedError`]).

pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::BedError;
pub use models::{BedSource, Region};

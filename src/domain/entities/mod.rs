//! Domain Entities
//!
//! - `StarEntry` - One validated star observation
//! - `RawEntry` - Field values before range clamping

mod entry;

pub use entry::{RawEntry, StarEntry};

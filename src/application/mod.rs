//! Application Layer
//!
//! The narrow interface a presentation shell calls into. It depends on the
//! domain layer and receives its infrastructure through ports.
//!
//! ## Use Cases
//!
//! - `StarCatalog` - parse, save, load and tabulate star entries

pub mod catalog;

pub use catalog::StarCatalog;

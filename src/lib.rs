//! StarData - star observation catalog
//!
//! Parses one-line descriptions of a star (sexagesimal right ascension and
//! declination, distance, radius, name), clamps every field into range,
//! appends entries to a flat text file and derives decimal-degree (A/B/C)
//! and Cartesian (X/Y/Z) tables from them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod infrastructure;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::StarCatalog;
pub use config::{Config, OutputFormat, Verbosity};
pub use domain::entities::{RawEntry, StarEntry};
pub use domain::ports::{EntryRepository, LoadReport, SkippedLine};
pub use domain::services::coordinates::{abc, xyz, AbcRow, XyzRow};
pub use error::{ParseError, StarDataError, StarDataResult};
pub use formatter::{format_abc, format_entries, format_xyz};
pub use infrastructure::TextFileRepository;
pub use parser::parse_line;

//! EntryRepository port - abstraction for entry persistence
//!
//! This trait allows the application layer to store and read star entries
//! without knowing about the on-disk line format.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::StarEntry;
use crate::error::{ParseError, StarDataResult};

/// Outcome of reading a data file.
///
/// `path` records which file was read, so callers that want to show the
/// "last loaded" file keep it themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub path: PathBuf,
    /// Entries in file order
    pub entries: Vec<StarEntry>,
    /// Non-blank lines that did not parse
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A line dropped during load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: ParseError,
}

/// Abstract repository for star entries
pub trait EntryRepository {
    /// Append one entry to the store at `path`, creating it if absent
    fn save(&self, entry: &StarEntry, path: &Path) -> StarDataResult<()>;

    /// Read every entry from `path`, skipping lines that do not parse
    fn load(&self, path: &Path) -> StarDataResult<LoadReport>;
}

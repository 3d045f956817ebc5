//! Star catalog use case
//!
//! Bundles the operations a shell needs: turn a raw line into an entry,
//! append it to a data file, read a data file back, and render the derived
//! coordinate tables.

use std::path::Path;

use crate::domain::entities::StarEntry;
use crate::domain::ports::{EntryRepository, LoadReport};
use crate::error::{ParseError, StarDataResult};
use crate::formatter;
use crate::infrastructure::TextFileRepository;
use crate::parser;

/// Entry point for presentation shells
pub struct StarCatalog<R>
where
    R: EntryRepository,
{
    repository: R,
}

impl StarCatalog<TextFileRepository> {
    /// Catalog backed by flat text files
    pub fn text_files() -> Self {
        Self::new(TextFileRepository::new())
    }
}

impl<R> StarCatalog<R>
where
    R: EntryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Parse one input line
    pub fn parse(&self, line: &str) -> Result<StarEntry, ParseError> {
        parser::parse_line(line)
    }

    /// Append `entry` to the data file at `path`
    pub fn save(&self, entry: &StarEntry, path: &Path) -> StarDataResult<()> {
        self.repository.save(entry, path)
    }

    /// Read all well-formed entries from `path`
    pub fn load(&self, path: &Path) -> StarDataResult<LoadReport> {
        self.repository.load(path)
    }

    /// A/B/C table
    pub fn format_abc(&self, entries: &[StarEntry]) -> String {
        formatter::format_abc(entries)
    }

    /// X/Y/Z table
    pub fn format_xyz(&self, entries: &[StarEntry]) -> String {
        formatter::format_xyz(entries)
    }
}

//! Flat text file repository
//!
//! Implements the EntryRepository port on a plain text file holding one
//! entry per line in the canonical fixed-width layout (see `StarEntry`'s
//! `Display`). Saving only ever appends; the file is never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::domain::entities::StarEntry;
use crate::domain::ports::entry_repository::{EntryRepository, LoadReport, SkippedLine};
use crate::error::{StarDataError, StarDataResult};
use crate::parser::parse_line;

/// Line-per-entry text file repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileRepository;

impl TextFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl EntryRepository for TextFileRepository {
    fn save(&self, entry: &StarEntry, path: &Path) -> StarDataResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_error(path))?;
        writeln!(file, "{entry}").map_err(write_error(path))?;
        file.flush().map_err(write_error(path))
    }

    fn load(&self, path: &Path) -> StarDataResult<LoadReport> {
        let file = File::open(path).map_err(read_error(path))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        // Split on raw bytes so one badly encoded line can't abort the load.
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(read_error(path))?;
            let line = String::from_utf8_lossy(&bytes);
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(reason) => skipped.push(SkippedLine {
                    line: index + 1,
                    reason,
                }),
            }
        }

        Ok(LoadReport {
            path: path.to_path_buf(),
            entries,
            skipped,
        })
    }
}

fn read_error(path: &Path) -> impl FnOnce(io::Error) -> StarDataError + '_ {
    move |source| StarDataError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> StarDataError + '_ {
    move |source| StarDataError::Write {
        path: path.to_path_buf(),
        source,
    }
}

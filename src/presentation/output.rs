//! Output Rendering
//!
//! Text blocks and NDJSON events for command results, plus verbosity-gated
//! diagnostics on stderr. Results go to stdout, diagnostics never do.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::Verbosity;
use crate::domain::entities::StarEntry;
use crate::domain::ports::{LoadReport, SkippedLine};
use crate::domain::services::coordinates::{abc, xyz, AbcRow, XyzRow};
use crate::formatter::{format_abc, format_entries, format_xyz};
use crate::presentation::cli::Section;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::from)?;
    out.write_all(b"\n")
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Emitted by `parse`
#[derive(Debug, Clone, Serialize)]
pub struct ParsedEvent<'a> {
    pub event: &'static str,
    pub entry: &'a StarEntry,
}

impl<'a> ParsedEvent<'a> {
    pub fn new(entry: &'a StarEntry) -> Self {
        Self {
            event: "parsed",
            entry,
        }
    }
}

/// Emitted after an entry is appended
#[derive(Debug, Clone, Serialize)]
pub struct SavedEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
    pub entry: &'a StarEntry,
}

impl<'a> SavedEvent<'a> {
    pub fn new(path: &'a Path, entry: &'a StarEntry) -> Self {
        Self {
            event: "saved",
            path,
            entry,
        }
    }
}

/// Emitted by `show`; tables not selected are omitted
#[derive(Debug, Clone, Serialize)]
pub struct LoadedEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<&'a [StarEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abc: Option<Vec<AbcRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xyz: Option<Vec<XyzRow>>,
    pub skipped: &'a [SkippedLine],
}

impl<'a> LoadedEvent<'a> {
    pub fn new(report: &'a LoadReport, section: Section) -> Self {
        let entries = &report.entries;
        Self {
            event: "loaded",
            path: &report.path,
            entries: section.includes_entries().then_some(entries.as_slice()),
            abc: section
                .includes_abc()
                .then(|| entries.iter().map(abc).collect()),
            xyz: section
                .includes_xyz()
                .then(|| entries.iter().map(xyz).collect()),
            skipped: &report.skipped,
        }
    }
}

/// Emitted when a command fails
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Confirmation shown after an entry is appended
pub fn render_saved(entry: &StarEntry, path: &Path) -> String {
    format!("Data saved to '{}':\n{}", path.display(), entry)
}

/// The selected tables for a loaded file, separated by blank lines
pub fn render_loaded(report: &LoadReport, section: Section) -> String {
    let mut blocks = Vec::new();
    if section.includes_entries() {
        blocks.push(format!(
            "File: '{}':\n{}",
            report.path.display(),
            format_entries(&report.entries)
        ));
    }
    if section.includes_abc() {
        blocks.push(format!("A, B, C:\n{}", format_abc(&report.entries)));
    }
    if section.includes_xyz() {
        blocks.push(format!("X, Y, Z:\n{}", format_xyz(&report.entries)));
    }
    blocks.join("\n\n")
}

/// Verbosity-gated stderr diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbosity: Verbosity,
}

impl Diagnostics {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Shown unless quiet
    pub fn warn(&self, message: impl AsRef<str>) {
        self.write(Verbosity::Normal, "warning: ", message.as_ref());
    }

    /// Shown with `-v`
    pub fn info(&self, message: impl AsRef<str>) {
        self.write(Verbosity::Verbose, "", message.as_ref());
    }

    /// Shown with `-vv`
    pub fn debug(&self, message: impl AsRef<str>) {
        self.write(Verbosity::Debug, "debug: ", message.as_ref());
    }

    /// Summarize a load: counts at `-v`, each skipped line at `-vv`
    pub fn load_summary(&self, report: &LoadReport) {
        self.info(format!(
            "loaded {} entries from {} ({} skipped)",
            report.entries.len(),
            report.path.display(),
            report.skipped_count()
        ));
        for skipped in &report.skipped {
            self.debug(format!("line {}: {}", skipped.line, skipped.reason));
        }
    }

    fn write(&self, level: Verbosity, prefix: &str, message: &str) {
        if self.verbosity >= level {
            eprintln!("{prefix}{message}");
        }
    }
}

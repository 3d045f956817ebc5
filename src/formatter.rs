//! Text tables for loaded entries
//!
//! Each table is a fixed header followed by one row per entry, in input
//! order, joined with `\n`. Values are left-aligned in 12-character columns.

use crate::domain::entities::StarEntry;
use crate::domain::services::coordinates::{abc, xyz};

pub const ENTRIES_HEADER: &str =
    "Hr(RA)    Min(RA)      Sec(RA) Deg(DEC)       Min(DEC)     Sec(DEC)   Dst(PC) Rad Nm";
pub const ABC_HEADER: &str = "A             B             C";
pub const XYZ_HEADER: &str = "X             Y             Z";

/// Canonical line of every entry under a column header.
pub fn format_entries(entries: &[StarEntry]) -> String {
    table(ENTRIES_HEADER, entries.iter().map(ToString::to_string))
}

/// Decimal-degree table.
pub fn format_abc(entries: &[StarEntry]) -> String {
    table(
        ABC_HEADER,
        entries.iter().map(abc).map(|r| row(r.a, r.b, r.c)),
    )
}

/// Cartesian table.
pub fn format_xyz(entries: &[StarEntry]) -> String {
    table(
        XYZ_HEADER,
        entries.iter().map(xyz).map(|r| row(r.x, r.y, r.z)),
    )
}

fn row(first: f64, second: f64, third: f64) -> String {
    format!("{first:<12} {second:<12} {third}")
}

fn table(header: &str, rows: impl Iterator<Item = String>) -> String {
    let mut out = header.to_string();
    for row in rows {
        out.push('\n');
        out.push_str(&row);
    }
    out
}

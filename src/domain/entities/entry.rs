//! StarEntry entity - one star observation
//!
//! Every numeric field is clamped into its physical range exactly once, when
//! the entry is constructed. There are no mutators, so the ranges hold for
//! the lifetime of the value.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

/// Right ascension hours
pub const HOURS_RA: RangeInclusive<i32> = 0..=23;
/// Right ascension minutes, also used for declination minutes
pub const MINUTES: RangeInclusive<i32> = 0..=59;
/// Right ascension / declination seconds
pub const SECONDS: RangeInclusive<f64> = 0.0..=59.9999;
/// Declination degrees
pub const DEGREES_DEC: RangeInclusive<i32> = -360..=360;
/// Distance in parsecs
pub const DISTANCE: RangeInclusive<f64> = 0.0..=40.0;
/// Radius
pub const RADIUS: RangeInclusive<f64> = 0.0..=30.0;

/// Field values as read, before any range clamping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawEntry {
    pub hours_ra: i32,
    pub minutes_ra: i32,
    pub seconds_ra: f64,
    pub degrees_dec: i32,
    pub minutes_dec: i32,
    pub seconds_dec: f64,
    pub distance: f64,
    pub radius: f64,
    pub name: String,
}

/// A validated star observation.
///
/// Built from a [`RawEntry`] via [`StarEntry::new`]. `Display` renders the
/// canonical fixed-width line that the file repository stores and the
/// parser reads back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarEntry {
    hours_ra: i32,
    minutes_ra: i32,
    seconds_ra: f64,
    degrees_dec: i32,
    minutes_dec: i32,
    seconds_dec: f64,
    distance: f64,
    radius: f64,
    name: String,
}

impl StarEntry {
    /// Clamp every field into range. Only the first whitespace-delimited
    /// token of the name is kept.
    pub fn new(raw: RawEntry) -> Self {
        Self {
            hours_ra: clamp_int(raw.hours_ra, HOURS_RA),
            minutes_ra: clamp_int(raw.minutes_ra, MINUTES),
            seconds_ra: clamp_real(raw.seconds_ra, SECONDS),
            degrees_dec: clamp_int(raw.degrees_dec, DEGREES_DEC),
            minutes_dec: clamp_int(raw.minutes_dec, MINUTES),
            seconds_dec: clamp_real(raw.seconds_dec, SECONDS),
            distance: clamp_real(raw.distance, DISTANCE),
            radius: clamp_real(raw.radius, RADIUS),
            name: raw
                .name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn hours_ra(&self) -> i32 {
        self.hours_ra
    }

    pub fn minutes_ra(&self) -> i32 {
        self.minutes_ra
    }

    pub fn seconds_ra(&self) -> f64 {
        self.seconds_ra
    }

    pub fn degrees_dec(&self) -> i32 {
        self.degrees_dec
    }

    pub fn minutes_dec(&self) -> i32 {
        self.minutes_dec
    }

    pub fn seconds_dec(&self) -> f64 {
        self.seconds_dec
    }

    /// Distance in parsecs
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Star name, empty when none was given
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<RawEntry> for StarEntry {
    fn from(raw: RawEntry) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for StarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "{:<9} {:<12} {:<7.4} {:<14} {:<12} {:<10} {:<2} {:<2} {}",
            self.hours_ra,
            self.minutes_ra,
            self.seconds_ra,
            self.degrees_dec,
            self.minutes_dec,
            self.seconds_dec,
            self.distance,
            self.radius,
            self.name,
        );
        f.write_str(line.trim_end())
    }
}

fn clamp_int(value: i32, range: RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

fn clamp_real(value: f64, range: RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    // `+ 0.0` turns -0.0 into 0.0
    value.clamp(*range.start(), *range.end()) + 0.0
}

//! Coordinate derivations
//!
//! Two alternate representations of an entry's position:
//!
//! - **A/B/C**: right ascension and declination in decimal degrees, plus the
//!   distance passed through unchanged.
//! - **X/Y/Z**: a Cartesian position from a spherical-to-Cartesian
//!   conversion. Only whole RA hours and whole DEC degrees take part; the
//!   minute and second terms are dropped for this table.
//!
//! The declination term of A/B/C adds minutes and seconds to the signed
//! degrees and then reapplies the sign of the degrees. A declination of
//! exactly 0 degrees therefore always yields `b == 0`, and for negative
//! degrees the sub-degree terms pull the value towards zero. Minutes are
//! divided by 60 in integer arithmetic, so for any clamped value they add
//! nothing.

use serde::Serialize;

use crate::domain::entities::StarEntry;

/// Degrees of arc per hour of right ascension
const DEGREES_PER_HOUR: f64 = 15.0;
/// Degrees of arc per minute of right ascension
const DEGREES_PER_MINUTE: f64 = 0.25;
/// Degrees of arc per second of right ascension, truncated
const DEGREES_PER_SECOND: f64 = 0.004166;

/// Decimal-degree row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbcRow {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Cartesian row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XyzRow {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Round to 3 decimal places, ties to even.
pub fn round3(value: f64) -> f64 {
    // `+ 0.0` turns -0.0 into 0.0
    (value * 1000.0).round_ties_even() / 1000.0 + 0.0
}

/// Decimal-degree RA (`a`), DEC (`b`) and distance (`c`).
pub fn abc(entry: &StarEntry) -> AbcRow {
    let a = f64::from(entry.hours_ra()) * DEGREES_PER_HOUR
        + f64::from(entry.minutes_ra()) * DEGREES_PER_MINUTE
        + entry.seconds_ra() * DEGREES_PER_SECOND;

    let dec = f64::from(entry.degrees_dec())
        + f64::from(entry.minutes_dec() / 60)
        + entry.seconds_dec() / 3600.0;
    let b = dec.abs() * f64::from(entry.degrees_dec().signum());

    AbcRow {
        a: round3(a),
        b: round3(b),
        c: entry.distance(),
    }
}

/// Cartesian position from whole RA hours, whole DEC degrees and distance.
pub fn xyz(entry: &StarEntry) -> XyzRow {
    let ra = (f64::from(entry.hours_ra()) * DEGREES_PER_HOUR).to_radians();
    let dec = f64::from(entry.degrees_dec()).to_radians();
    let distance = entry.distance();

    XyzRow {
        x: round3(distance * ra.cos() * dec.cos()),
        y: round3(distance * ra.sin() * dec.cos()),
        z: round3(distance * dec.sin()),
    }
}

//! Line parser for star observations
//!
//! Input is one line of whitespace-separated tokens:
//!
//! ```text
//! hoursRA minutesRA secondsRA degreesDEC minutesDEC secondsDEC distance [radius] [name]
//! ```
//!
//! The first seven tokens are mandatory and must convert to their numeric
//! type. A radius that does not parse falls back to 0, a missing name is
//! empty, and anything after the name is ignored. Range checking is left to
//! [`StarEntry::new`], which clamps.

use std::str::FromStr;

use crate::domain::entities::{RawEntry, StarEntry};
use crate::error::ParseError;

/// Number of tokens every line must carry
pub const REQUIRED_FIELDS: usize = 7;

/// Human-readable reminder of the line layout, shown by interactive shells
pub const LINE_FORMAT_HINT: &str = "hours(RA) minutes(RA) seconds(RA) degrees(DEC) minutes(DEC) seconds(DEC) distance(pc) [radius] [name]";

/// Parse one raw line into a clamped [`StarEntry`].
pub fn parse_line(line: &str) -> Result<StarEntry, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < REQUIRED_FIELDS {
        return Err(ParseError::TooFewFields {
            expected: REQUIRED_FIELDS,
            found: tokens.len(),
        });
    }

    let raw = RawEntry {
        hours_ra: number(tokens[0], "hours RA")?,
        minutes_ra: number(tokens[1], "minutes RA")?,
        seconds_ra: real(tokens[2], "seconds RA")?,
        degrees_dec: number(tokens[3], "degrees DEC")?,
        minutes_dec: number(tokens[4], "minutes DEC")?,
        seconds_dec: real(tokens[5], "seconds DEC")?,
        distance: real(tokens[6], "distance")?,
        radius: tokens
            .get(7)
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|r| r.is_finite())
            .unwrap_or(0.0),
        name: tokens.get(8).copied().unwrap_or_default().to_string(),
    };

    Ok(StarEntry::new(raw))
}

fn number<T: FromStr>(token: &str, field: &'static str) -> Result<T, ParseError> {
    token.parse().map_err(|_| invalid(token, field))
}

/// Reals must also be finite: `NaN` and `inf` are not measurements.
fn real(token: &str, field: &'static str) -> Result<f64, ParseError> {
    let value: f64 = number(token, field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(token, field))
    }
}

fn invalid(token: &str, field: &'static str) -> ParseError {
    ParseError::InvalidNumber {
        field,
        value: token.to_string(),
    }
}

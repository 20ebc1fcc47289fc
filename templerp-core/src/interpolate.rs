//! Piecewise-Linear Interpolation
//!
//! ## Algorithm
//!
//! The table is scanned from the first point. For each bracket
//! `[p[i], p[i+1]]` the raw input is tested against the closed interval
//! `p[i].x ..= p[i+1].x`, and the first bracket that contains it wins:
//!
//! ```text
//! y = p[i].y + (p[i+1].y - p[i].y) * (raw - p[i].x) / (p[i+1].x - p[i].x)
//! ```
//!
//! ## Integer Semantics
//!
//! The arithmetic is 32-bit signed with truncating division, the same as the
//! firmware this table was tuned against. Truncation is toward zero, so on a
//! falling segment the result rounds up rather than down:
//!
//! ```text
//! (0, 10) .. (3, 0), raw = 1:   10 + (-10 * 1) / 3 = 10 + (-3) = 7
//! ```
//!
//! The largest intermediate product is `255 * 255`, well inside `i32`, and
//! the result always lies between the bracket's two `y` values, so it fits
//! `i16` without checks.
//!
//! ## Boundaries
//!
//! A raw value equal to a shared node satisfies two brackets. Scanning in
//! order means the lower bracket is always the one evaluated; both give the
//! node's own `y`, so the result is the same either way.
//!
//! ## Cost
//!
//! O(N) comparisons, no allocation.

use crate::{
    constants::UNBRACKETED_SENTINEL,
    errors::{LookupError, LookupResult},
    macros::log_warn,
    table::Coordinate,
};

/// Interpolate `raw` over `points`.
///
/// Returns [`LookupError::Unbracketed`] when no bracket contains `raw`, which
/// only happens with a table that does not span the full `u8` domain.
pub fn interpolate(points: &[Coordinate], raw: u8) -> LookupResult<i16> {
    for pair in points.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if lower.x <= raw && raw <= upper.x {
            return Ok(lerp(lower, upper, raw));
        }
    }

    log_warn!("Raw value {} outside calibration table ({} points)", raw, points.len());
    Err(LookupError::Unbracketed { raw })
}

/// Legacy form of [`interpolate`] returning [`UNBRACKETED_SENTINEL`] on failure.
///
/// Callers must compare against the sentinel themselves.
pub fn interpolate_or_sentinel(points: &[Coordinate], raw: u8) -> i16 {
    interpolate(points, raw).unwrap_or(UNBRACKETED_SENTINEL)
}

fn lerp(lower: Coordinate, upper: Coordinate, raw: u8) -> i16 {
    let span = i32::from(upper.x) - i32::from(lower.x);
    // Only an unvalidated table with a repeated x gets here with span == 0
    if span == 0 {
        return i16::from(lower.y);
    }

    let rise = i32::from(upper.y) - i32::from(lower.y);
    let run = i32::from(raw) - i32::from(lower.x);
    (i32::from(lower.y) + rise * run / span) as i16
}

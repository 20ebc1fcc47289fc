//! Powermon433 Quantization Fudge
//!
//! **This is not a Fahrenheit to Celsius conversion.** It looks like one,
//! and for room temperatures lands within a degree or two of one, but the
//! constants were tuned by hand to cancel the rounding bias of the
//! Powermon433 integer display path. Reuse it anywhere else and the
//! numbers will be wrong.
//!
//! ```text
//! fudge(v) = (10 * v - 308) / 18        truncating division
//!
//!   v  |  fudge(v) | true °C (for comparison only)
//! -----|-----------|------------------------------
//!  -49 |    -44    | -45.0
//!    0 |    -17    | -17.8
//!   32 |      0    |   0.0
//!   50 |     10    |  10.0
//!  127 |     53    |  52.8
//! ```
//!
//! ## Integer width
//!
//! The product is computed in `i32`, so `10 * v` cannot overflow for any
//! `i16` input. The 16-bit firmware wraps once `|v| > 3276`; every value the
//! calibration tables produce is far inside the range where the two agree.

use crate::constants::{FUDGE_DIVISOR, FUDGE_OFFSET, FUDGE_SCALE};

/// Apply the Powermon433 fudge to an interpolated °F value
pub const fn fudge_convert(value: i16) -> i16 {
    ((FUDGE_SCALE * value as i32 - FUDGE_OFFSET) / FUDGE_DIVISOR) as i16
}

//! Fudge Transform Constants
//!
//! `(FUDGE_SCALE * value - FUDGE_OFFSET) / FUDGE_DIVISOR`
//!
//! These resemble a Fahrenheit-to-Celsius conversion but are not one. They
//! were tuned by hand to cancel the quantization bias of the Powermon433
//! integer pipeline and must be reproduced exactly. Do not rederive them.

/// Multiplier applied to the input.
pub const FUDGE_SCALE: i32 = 10;

/// Subtracted after scaling.
pub const FUDGE_OFFSET: i32 = 308;

/// Truncating divisor.
pub const FUDGE_DIVISOR: i32 = 18;

//! Temperature calibration for 8-bit sensor readings
//!
//! Turns the raw temperature byte reported by a Powermon433-decoded
//! transmitter into a temperature by piecewise-linear interpolation over a
//! small hand-tuned table, and provides the fudge transform the Powermon433
//! display path applies afterwards.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Tables are `const` data, checked at compile time or on load
//! - Integer arithmetic only, bit-exact with the original firmware
//!
//! ```rust
//! use templerp_core::{fudge_convert, POWERMON433};
//!
//! let fahrenheit = POWERMON433.lookup(120).unwrap();
//! assert_eq!(fahrenheit, 71);
//! assert_eq!(fudge_convert(fahrenheit), 22);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod macros;

pub mod constants;
pub mod errors;
pub mod fudge;
pub mod interpolate;
pub mod reading;
pub mod table;
pub mod tables;

// Public API
pub use constants::UNBRACKETED_SENTINEL;
pub use errors::{LookupError, LookupResult, TableError, TableResult};
pub use fudge::fudge_convert;
pub use interpolate::{interpolate, interpolate_or_sentinel};
pub use reading::TemperatureReading;
pub use table::{CalibrationTable, Coordinate, TableBuilder};
pub use tables::POWERMON433;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

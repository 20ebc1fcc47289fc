//! Error Types for Calibration Tables and Lookups
//!
//! Two failure classes exist, and they happen at different times:
//!
//! ### Table construction
//! - `TooFewPoints`: a table needs at least one bracket (two points)
//! - `NotIncreasing`: `x` must strictly increase from one entry to the next
//! - `CapacityExceeded` / `Incomplete`: a [`TableBuilder`] was fed the wrong
//!   number of points for its fixed size
//!
//! ### Lookup
//! - `Unbracketed`: the raw input falls outside every bracket of the table.
//!   A table that spans the full `u8` domain never produces this.
//!
//! Both enums are `Copy` and carry no heap data, so they can be returned from
//! hot paths and stored without allocation.
//!
//! ```rust
//! use templerp_core::{LookupError, POWERMON433};
//!
//! match POWERMON433.lookup(120) {
//!     Ok(fahrenheit) => assert_eq!(fahrenheit, 71),
//!     Err(LookupError::Unbracketed { raw }) => panic!("raw {raw} not covered"),
//! }
//! ```
//!
//! [`TableBuilder`]: crate::table::TableBuilder

use thiserror_no_std::Error;

/// Result type for table construction
pub type TableResult<T> = Result<T, TableError>;

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Reasons a calibration table is rejected at load time
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Fewer than two points, so no bracket exists
    #[error("Table has {len} points, need at least 2")]
    TooFewPoints {
        /// Number of points supplied
        len: usize,
    },

    /// Entry `index` does not lie strictly to the right of its predecessor
    #[error("Table x not strictly increasing at index {index}: {previous} then {next}")]
    NotIncreasing {
        /// Index of the offending entry
        index: usize,
        /// `x` of entry `index - 1`
        previous: u8,
        /// `x` of entry `index`
        next: u8,
    },

    /// More points pushed into a builder than the table holds
    #[error("Table capacity of {capacity} points exceeded")]
    CapacityExceeded {
        /// Fixed table size
        capacity: usize,
    },

    /// Builder finished before every slot was filled
    #[error("Table incomplete: need {expected} points, have {actual}")]
    Incomplete {
        /// Fixed table size
        expected: usize,
        /// Points pushed so far
        actual: usize,
    },
}

/// Lookup failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No bracket of the table contains the raw input
    #[error("Raw value {raw} is not bracketed by the calibration table")]
    Unbracketed {
        /// The raw sensor byte that was looked up
        raw: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for TableError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::TooFewPoints { len } =>
                defmt::write!(fmt, "Table has {} points, need 2", len),
            Self::NotIncreasing { index, previous, next } =>
                defmt::write!(fmt, "x not increasing at {}: {} then {}", index, previous, next),
            Self::CapacityExceeded { capacity } =>
                defmt::write!(fmt, "Table capacity {} exceeded", capacity),
            Self::Incomplete { expected, actual } =>
                defmt::write!(fmt, "Table needs {} points, have {}", expected, actual),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LookupError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Unbracketed { raw } =>
                defmt::write!(fmt, "Raw {} unbracketed", raw),
        }
    }
}

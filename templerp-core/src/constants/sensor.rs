//! Raw Sensor Domain
//!
//! The transmitter reports its temperature as a single unsigned byte. The
//! byte is not linear in temperature, which is why a calibration table sits
//! between it and any displayed value.

/// Smallest raw reading the sensor can report.
pub const RAW_MIN: u8 = u8::MIN;

/// Largest raw reading the sensor can report.
pub const RAW_MAX: u8 = u8::MAX;

/// Number of calibration points in the shipped Powermon433 table.
pub const POWERMON433_TABLE_SIZE: usize = 22;

/// Value returned by the legacy lookup when no bracket contains the input.
///
/// Lies outside the calibrated band (-49..=127 °F), so it cannot be confused
/// with a real reading. Only reachable with a table that does not span
/// `RAW_MIN..=RAW_MAX`.
pub const UNBRACKETED_SENTINEL: i16 = -125;

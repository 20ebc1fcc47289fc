//! Shipped Calibration Tables
//!
//! ## Powermon433
//!
//! Maps the temperature byte of the Blue Line BLI-28000 transmitter, as
//! decoded by the Powermon433 receiver, to degrees Fahrenheit.
//!
//! The points are hand-tuned. Spacing is tight between raw 150 and 185,
//! where the response is least regular, and the last segment is flat:
//! everything from raw 185 up reads as the 127 °F ceiling.
//!
//! ```text
//! raw        °F           °F per count
//! 0-10       -49..-42     0.7
//! 10-50      -42..16      1.5
//! 50-150     16..94       0.8
//! 150-185    94..127      0.9, irregular
//! 185-255    127          flat
//! ```

use crate::{
    constants::POWERMON433_TABLE_SIZE,
    table::{CalibrationTable, Coordinate},
};

/// Powermon433 raw byte to °F
pub const POWERMON433: CalibrationTable<POWERMON433_TABLE_SIZE> = CalibrationTable::new_unchecked([
    Coordinate::new(0, -49),
    Coordinate::new(5, -45),
    Coordinate::new(10, -42),
    Coordinate::new(20, -22),
    Coordinate::new(30, -7),
    Coordinate::new(40, 5),
    Coordinate::new(50, 16),
    Coordinate::new(70, 34),
    Coordinate::new(80, 42),
    Coordinate::new(90, 49),
    Coordinate::new(100, 57),
    Coordinate::new(130, 78),
    Coordinate::new(150, 94),
    Coordinate::new(152, 96),
    Coordinate::new(154, 97),
    Coordinate::new(158, 101),
    Coordinate::new(160, 102),
    Coordinate::new(176, 118),
    Coordinate::new(180, 121),
    Coordinate::new(184, 126),
    Coordinate::new(185, 127),
    Coordinate::new(255, 127),
]);

const _: () = assert!(POWERMON433.is_well_formed());
const _: () = assert!(POWERMON433.spans_domain());

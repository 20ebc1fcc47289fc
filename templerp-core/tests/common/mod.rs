//! Shared fixtures for integration tests
//!
//! - A straight-line reference of the firmware lookup, written independently
//!   of the crate, to cross-check results
//! - Truncated tables that leave part of the raw domain unbracketed
//! - Precomputed readings used as a regression oracle

#![allow(dead_code)]

use templerp_core::{CalibrationTable, Coordinate, POWERMON433};

/// Firmware lookup written out index by index
pub fn reference_lookup(points: &[Coordinate], raw: u8) -> i32 {
    let x = i32::from(raw);
    let mut i = 0;
    while i + 1 < points.len() {
        let (x0, y0) = (i32::from(points[i].x), i32::from(points[i].y));
        let (x1, y1) = (i32::from(points[i + 1].x), i32::from(points[i + 1].y));
        if x0 <= x && x1 >= x {
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
        i += 1;
    }
    -125
}

/// Firmware fudge written out with `i32` operands
pub fn reference_fudge(value: i32) -> i32 {
    (10 * value - 308) / 18
}

/// The shipped table with its last point dropped, ending at raw 185
pub fn truncated_powermon433() -> CalibrationTable<21> {
    let mut points = [Coordinate::new(0, 0); 21];
    points.copy_from_slice(&POWERMON433.points()[..21]);
    CalibrationTable::new(points).expect("prefix of a valid table is valid")
}

/// The shipped table with its first point dropped, starting at raw 5
pub fn headless_powermon433() -> CalibrationTable<21> {
    let mut points = [Coordinate::new(0, 0); 21];
    points.copy_from_slice(&POWERMON433.points()[1..]);
    CalibrationTable::new(points).expect("suffix of a valid table is valid")
}

/// `(raw, °F, fudged °C)` produced by the original firmware
pub const POWERMON433_ORACLE: [(u8, i16, i16); 28] = [
    (0, -49, -44),
    (1, -49, -44),
    (2, -48, -43),
    (3, -47, -43),
    (4, -46, -42),
    (7, -44, -41),
    (13, -36, -37),
    (15, -32, -34),
    (25, -15, -25),
    (33, -4, -19),
    (45, 10, -11),
    (60, 25, -3),
    (75, 38, 4),
    (99, 56, 14),
    (115, 67, 20),
    (129, 77, 25),
    (140, 86, 30),
    (151, 95, 35),
    (153, 96, 36),
    (156, 99, 37),
    (159, 101, 39),
    (170, 112, 45),
    (178, 119, 49),
    (182, 123, 51),
    (184, 126, 52),
    (185, 127, 53),
    (200, 127, 53),
    (255, 127, 53),
];

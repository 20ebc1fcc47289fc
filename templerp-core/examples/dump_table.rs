//! Diagnostic Table Dump
//!
//! Prints every raw value with its interpolated °F and fudged °C, one row
//! per byte, in the same layout as the firmware's serial diagnostic.
//!
//! ```bash
//! cargo run --example dump_table
//! ```

use templerp_core::{TemperatureReading, POWERMON433};

fn main() {
    println!("  raw :    °F :    °C");
    for raw in u8::MIN..=u8::MAX {
        match TemperatureReading::convert(&POWERMON433, raw) {
            Ok(reading) => println!("{reading}"),
            Err(e) => println!("{raw:5} : {e}"),
        }
    }
}

//! Converted Temperature Readings
//!
//! Pairs the two conversions for a single raw sample the way the
//! Powermon433 receiver reports it: the raw byte, the interpolated °F value
//! and the fudged °C value.
//!
//! With the `serde` feature the Celsius field serializes as `Temp_C`, the key
//! the receiver's JSON line protocol uses, so a reading can be handed
//! straight to the MQTT bridge.

use core::fmt;

use crate::{
    errors::LookupResult,
    fudge::fudge_convert,
    table::CalibrationTable,
};

/// One converted sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureReading {
    /// Raw sensor byte
    pub raw: u8,
    /// Interpolated temperature in °F
    pub fahrenheit: i16,
    /// Fudged Powermon433 display value in °C
    #[cfg_attr(feature = "serde", serde(rename = "Temp_C"))]
    pub celsius: i16,
}

impl TemperatureReading {
    /// Convert a raw byte through `table` and the fudge transform
    pub fn convert<const N: usize>(table: &CalibrationTable<N>, raw: u8) -> LookupResult<Self> {
        let fahrenheit = table.lookup(raw)?;
        Ok(Self {
            raw,
            fahrenheit,
            celsius: fudge_convert(fahrenheit),
        })
    }
}

/// Diagnostic dump row: `raw : °F : °C`, each right-aligned to five columns
impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:5} : {:5} : {:5}", self.raw, self.fahrenheit, self.celsius)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TemperatureReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "raw {} = {}F / {}C", self.raw, self.fahrenheit, self.celsius)
    }
}

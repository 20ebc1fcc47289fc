//! Constants for templerp
//!
//! Every numeric value with meaning outside a single function lives here.
//!
//! ## Organization
//!
//! - **Sensor**: the raw input domain and the lookup failure sentinel
//! - **Fudge**: the Powermon433 quantization compensation constants

/// Raw sensor domain and lookup sentinel.
pub mod sensor;

/// Constants of the Powermon433 fudge transform.
pub mod fudge;

pub use sensor::{RAW_MIN, RAW_MAX, POWERMON433_TABLE_SIZE, UNBRACKETED_SENTINEL};

pub use fudge::{FUDGE_SCALE, FUDGE_OFFSET, FUDGE_DIVISOR};

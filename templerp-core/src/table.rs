//! Calibration Tables
//!
//! A calibration table is a short, hand-tuned list of `(raw, temperature)`
//! points. The spacing is deliberately uneven: points cluster where the
//! sensor's response bends and thin out where it is close to linear.
//!
//! ## Invariants
//!
//! - At least two points, so at least one bracket exists
//! - `x` strictly increases from one point to the next
//! - For full coverage, the first `x` is `RAW_MIN` and the last is `RAW_MAX`
//!
//! [`CalibrationTable::new`] checks the first two and fails fast.
//! [`CalibrationTable::new_unchecked`] accepts anything, which matches how the
//! Powermon433 firmware always behaved: a malformed table gives wrong
//! interpolation or the sentinel, never an error.
//!
//! ## Memory
//!
//! Each point is two bytes. The shipped 22-point table is 44 bytes and lives
//! in `.rodata` as a `const`.

use heapless::Vec;

use crate::{
    constants::{RAW_MAX, RAW_MIN, UNBRACKETED_SENTINEL},
    errors::{LookupResult, TableError, TableResult},
    interpolate,
    macros::log_debug,
};

/// One calibrated correspondence between a raw reading and a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Raw sensor byte
    pub x: u8,
    /// Calibrated output at `x`
    pub y: i8,
}

impl Coordinate {
    /// Create a point
    pub const fn new(x: u8, y: i8) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Coordinate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size, read-only calibration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationTable<const N: usize> {
    points: [Coordinate; N],
}

impl<const N: usize> CalibrationTable<N> {
    /// Build a table, rejecting short or non-monotonic point sets
    pub fn new(points: [Coordinate; N]) -> TableResult<Self> {
        validate_points(&points).map_err(|e| {
            log_debug!("Calibration table rejected: {}", e);
            e
        })?;
        Ok(Self { points })
    }

    /// Build a table without checking it.
    ///
    /// Usable in `const` context. Pair with [`is_well_formed`](Self::is_well_formed)
    /// in a `const` assertion to get the check at compile time instead.
    pub const fn new_unchecked(points: [Coordinate; N]) -> Self {
        Self { points }
    }

    /// Check the table invariants
    pub fn validate(&self) -> TableResult<()> {
        validate_points(&self.points)
    }

    /// `const` form of [`validate`](Self::validate)
    pub const fn is_well_formed(&self) -> bool {
        if N < 2 {
            return false;
        }
        let mut i = 1;
        while i < N {
            if self.points[i].x <= self.points[i - 1].x {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True when every raw byte falls inside some bracket.
    ///
    /// Only meaningful for a well-formed table, so a malformed one reports
    /// `false` even if its endpoints happen to reach the domain limits.
    pub const fn spans_domain(&self) -> bool {
        if !self.is_well_formed() {
            return false;
        }
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.x == RAW_MIN && last.x == RAW_MAX,
            _ => false,
        }
    }

    /// Number of points
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-sized table
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Point at `index`
    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    /// All points in order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterate over the points in order
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }

    /// Smallest and largest calibrated output, `None` for an empty table
    pub fn output_range(&self) -> Option<(i8, i8)> {
        let min = self.points.iter().map(|p| p.y).min()?;
        let max = self.points.iter().map(|p| p.y).max()?;
        Some((min, max))
    }

    /// Interpolate a raw reading
    pub fn lookup(&self, raw: u8) -> LookupResult<i16> {
        interpolate::interpolate(&self.points, raw)
    }

    /// Interpolate a raw reading, returning [`UNBRACKETED_SENTINEL`] on failure
    pub fn lookup_or_sentinel(&self, raw: u8) -> i16 {
        self.lookup(raw).unwrap_or(UNBRACKETED_SENTINEL)
    }
}

impl<const N: usize> TryFrom<&[Coordinate]> for CalibrationTable<N> {
    type Error = TableError;

    fn try_from(points: &[Coordinate]) -> TableResult<Self> {
        let mut builder = TableBuilder::<N>::new();
        for point in points {
            builder.push(point.x, point.y)?;
        }
        builder.build()
    }
}

fn validate_points(points: &[Coordinate]) -> TableResult<()> {
    if points.len() < 2 {
        return Err(TableError::TooFewPoints { len: points.len() });
    }

    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].x <= pair[0].x {
            return Err(TableError::NotIncreasing {
                index: index + 1,
                previous: pair[0].x,
                next: pair[1].x,
            });
        }
    }

    Ok(())
}

/// Assembles a table one point at a time without heap allocation
///
/// ```rust
/// use templerp_core::TableBuilder;
///
/// let mut builder = TableBuilder::<3>::new();
/// builder.push(0, -40)?.push(128, 20)?.push(255, 100)?;
/// let table = builder.build()?;
/// assert_eq!(table.lookup(64)?, -10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder<const N: usize> {
    points: Vec<Coordinate, N>,
}

impl<const N: usize> TableBuilder<N> {
    /// Empty builder
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point
    pub fn push(&mut self, x: u8, y: i8) -> TableResult<&mut Self> {
        self.points
            .push(Coordinate::new(x, y))
            .map_err(|_| TableError::CapacityExceeded { capacity: N })?;
        Ok(self)
    }

    /// Points pushed so far
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True before the first push
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Validate and produce the table
    pub fn build(&self) -> TableResult<CalibrationTable<N>> {
        if self.points.len() != N {
            return Err(TableError::Incomplete {
                expected: N,
                actual: self.points.len(),
            });
        }

        let mut points = [Coordinate::new(0, 0); N];
        points.copy_from_slice(&self.points);
        CalibrationTable::new(points)
    }
}

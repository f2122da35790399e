use crate::core::degrees::Degrees;
use std::fmt;

/// Identifies one grid cell by its lower-left (south-west) corner.
///
/// Both coordinates are exact, so a key computed by stepping across the
/// extent compares equal to the same key parsed from the count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Latitude of the cell's southern edge
    pub latitude: Degrees,
    /// Longitude of the cell's western edge
    pub longitude: Degrees,
}

impl CellKey {
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// The value emitted for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    /// A whole-number count, written as a decimal integer
    Count(u64),
    /// Any other numeric value, written with the shortest exact `f32` form
    Value(f32),
}

impl CellValue {
    pub const ZERO: CellValue = CellValue::Count(0);

    pub fn as_f32(&self) -> f32 {
        match self {
            CellValue::Count(count) => *count as f32,
            CellValue::Value(value) => *value,
        }
    }

    /// The four bytes written to the binary grid.
    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.as_f32().to_le_bytes()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Count(count) => write!(f, "{}", count),
            CellValue::Value(value) => write!(f, "{}", value),
        }
    }
}

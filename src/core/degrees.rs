use crate::core::constants::{DECIMAL_PLACES, GLOBAL_EXTENT, MAX_RESOLUTION, SCALE_FACTOR};
use crate::util::error::OccGridError;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// An exact degree value with two decimal places, stored as hundredths.
///
/// Cell keys are built from repeated `origin + resolution * n` steps, so the
/// arithmetic has to stay in integers for lookups to match the keys read from
/// the count table.
///
/// # Example
///
/// ```
/// use occgrid_rs::Degrees;
///
/// # fn main() -> Result<(), occgrid_rs::OccGridError> {
/// let lat: Degrees = "-35.1".parse()?;
/// assert_eq!(lat.hundredths(), -3510);
/// assert_eq!(lat.to_string(), "-35.10");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Degrees(i64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0);

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    pub const fn from_whole(degrees: i64) -> Self {
        Self(degrees * SCALE_FACTOR)
    }

    /// Rounds a floating point value to the nearest hundredth.
    pub fn from_f64(value: f64) -> Self {
        Self((value * SCALE_FACTOR as f64).round() as i64)
    }

    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE_FACTOR as f64
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Within -90..=90.
    pub fn is_latitude(&self) -> bool {
        let limit = GLOBAL_EXTENT[3] * SCALE_FACTOR;
        (-limit..=limit).contains(&self.0)
    }

    /// Within -180..=180.
    pub fn is_longitude(&self) -> bool {
        let limit = GLOBAL_EXTENT[2] * SCALE_FACTOR;
        (-limit..=limit).contains(&self.0)
    }

    pub fn checked_add(self, rhs: Degrees) -> Option<Degrees> {
        self.0.checked_add(rhs.0).map(Degrees)
    }
}

impl FromStr for Degrees {
    type Err = OccGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hundredths(s.trim())
            .map(Degrees)
            .ok_or_else(|| OccGridError::InvalidCoordinate(format!("'{}'", s.trim())))
    }
}

fn parse_hundredths(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (unsigned, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let places = DECIMAL_PLACES as usize;
    let (kept, rest) = fraction.split_at(fraction.len().min(places));
    // Digits past the second place are only accepted when they do not change the value.
    if rest.bytes().any(|b| b != b'0') {
        return None;
    }

    let mut value: i64 = 0;
    for b in whole.bytes() {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    for i in 0..places {
        let digit = kept.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        value = value.checked_mul(10)?.checked_add(digit)?;
    }

    Some(if negative { -value } else { value })
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE_FACTOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl Add for Degrees {
    type Output = Degrees;

    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;

    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<i64> for Degrees {
    type Output = Degrees;

    fn mul(self, rhs: i64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

/// Edge length of a grid cell, above zero and at most 360 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution(Degrees);

impl Resolution {
    pub fn new(degrees: Degrees) -> Result<Self, OccGridError> {
        if !degrees.is_positive() {
            return Err(OccGridError::InvalidResolution(format!(
                "{} (must be positive)",
                degrees
            )));
        }
        if degrees > Degrees::from_whole(MAX_RESOLUTION) {
            return Err(OccGridError::InvalidResolution(format!(
                "{} (must not exceed {} degrees)",
                degrees, MAX_RESOLUTION
            )));
        }
        Ok(Self(degrees))
    }

    pub const fn degrees(&self) -> Degrees {
        self.0
    }

    pub const fn hundredths(&self) -> i64 {
        self.0.hundredths()
    }

    /// Number of cells needed to cover `span`, rounding up a partial cell.
    pub fn cells_across(&self, span: Degrees) -> usize {
        let span = span.hundredths().max(0);
        let step = self.hundredths();
        let whole = span / step;
        let partial = i64::from(span % step != 0);
        (whole + partial) as usize
    }

    /// Whether `value` lies on the lattice of multiples of this resolution.
    pub fn is_aligned(&self, value: Degrees) -> bool {
        value.hundredths() % self.hundredths() == 0
    }

    /// Largest multiple of this resolution not greater than `value`.
    pub fn floor(&self, value: Degrees) -> Degrees {
        let step = self.hundredths();
        Degrees::from_hundredths(value.hundredths().div_euclid(step) * step)
    }
}

impl FromStr for Resolution {
    type Err = OccGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s.parse::<Degrees>().map_err(|_| {
            OccGridError::InvalidResolution(format!(
                "'{}' (expected a decimal with at most {} places)",
                s.trim(),
                DECIMAL_PLACES
            ))
        })?;
        Resolution::new(degrees)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

use crate::core::cell::CellKey;
use crate::core::constants::GLOBAL_EXTENT;
use crate::core::degrees::{Degrees, Resolution};
use crate::util::error::OccGridError;
use geo_types::{Rect, coord};
use std::str::FromStr;

/// Bounding box of a grid in exact degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    min_lon: Degrees,
    min_lat: Degrees,
    max_lon: Degrees,
    max_lat: Degrees,
}

impl GridExtent {
    pub fn new(
        min_lon: Degrees,
        min_lat: Degrees,
        max_lon: Degrees,
        max_lat: Degrees,
    ) -> Result<Self, OccGridError> {
        let in_range = [min_lon, max_lon].iter().all(Degrees::is_longitude)
            && [min_lat, max_lat].iter().all(Degrees::is_latitude);
        if !in_range {
            return Err(OccGridError::InvalidExtent(format!(
                "[{}, {}, {}, {}] (longitude must be within -180..180, latitude within -90..90)",
                min_lon, min_lat, max_lon, max_lat
            )));
        }
        if min_lon >= max_lon || min_lat >= max_lat {
            return Err(OccGridError::InvalidExtent(format!(
                "[{}, {}, {}, {}] (min must be below max on both axes)",
                min_lon, min_lat, max_lon, max_lat
            )));
        }
        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// The whole globe, -180..180 by -90..90.
    pub fn global() -> Self {
        Self {
            min_lon: Degrees::from_whole(GLOBAL_EXTENT[0]),
            min_lat: Degrees::from_whole(GLOBAL_EXTENT[1]),
            max_lon: Degrees::from_whole(GLOBAL_EXTENT[2]),
            max_lat: Degrees::from_whole(GLOBAL_EXTENT[3]),
        }
    }

    /// Smallest extent containing every cell keyed in `keys`.
    ///
    /// Returns an error when `keys` is empty or a key lies off the globe.
    pub fn covering<'a, I>(keys: I, resolution: Resolution) -> Result<Self, OccGridError>
    where
        I: IntoIterator<Item = &'a CellKey>,
    {
        let mut bounds: Option<[Degrees; 4]> = None;
        for key in keys {
            if !key.latitude.is_latitude() || !key.longitude.is_longitude() {
                return Err(OccGridError::InvalidExtent(format!(
                    "cell {} lies outside the globe",
                    key
                )));
            }
            let lat = resolution.floor(key.latitude);
            let lon = resolution.floor(key.longitude);
            bounds = Some(match bounds {
                None => [lon, lat, lon, lat],
                Some([a, b, c, d]) => [a.min(lon), b.min(lat), c.max(lon), d.max(lat)],
            });
        }

        let [min_lon, min_lat, max_lon, max_lat] = bounds.ok_or_else(|| {
            OccGridError::InvalidExtent("cannot derive an extent from an empty source".to_string())
        })?;
        let step = resolution.degrees();
        let overflow = || OccGridError::InvalidExtent(format!("cell size {} overflows", step));
        let max_lon = max_lon.checked_add(step).ok_or_else(overflow)?;
        let max_lat = max_lat.checked_add(step).ok_or_else(overflow)?;
        Self::new(min_lon, min_lat, max_lon, max_lat)
    }

    /// Converts a `geo_types::Rect`, rounding each corner to the nearest hundredth.
    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, OccGridError> {
        Self::new(
            Degrees::from_f64(rect.min().x),
            Degrees::from_f64(rect.min().y),
            Degrees::from_f64(rect.max().x),
            Degrees::from_f64(rect.max().y),
        )
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon.to_f64(), y: self.min_lat.to_f64() },
            coord! { x: self.max_lon.to_f64(), y: self.max_lat.to_f64() },
        )
    }

    pub fn min_lon(&self) -> Degrees {
        self.min_lon
    }

    pub fn min_lat(&self) -> Degrees {
        self.min_lat
    }

    pub fn max_lon(&self) -> Degrees {
        self.max_lon
    }

    pub fn max_lat(&self) -> Degrees {
        self.max_lat
    }

    pub fn width(&self) -> Degrees {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> Degrees {
        self.max_lat - self.min_lat
    }
}

impl Default for GridExtent {
    fn default() -> Self {
        Self::global()
    }
}

/// Parses `MIN_LON,MIN_LAT,MAX_LON,MAX_LAT`.
impl FromStr for GridExtent {
    type Err = OccGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(OccGridError::InvalidExtent(format!(
                "'{}' (expected MIN_LON,MIN_LAT,MAX_LON,MAX_LAT)",
                s
            )));
        }
        Self::new(
            parts[0].parse()?,
            parts[1].parse()?,
            parts[2].parse()?,
            parts[3].parse()?,
        )
    }
}

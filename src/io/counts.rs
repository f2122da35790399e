use crate::core::cell::CellKey;
use crate::core::degrees::{Degrees, Resolution};
use crate::core::extent::GridExtent;
use crate::util::error::OccGridError;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One line of the count table: `latitude,longitude,count`.
///
/// Coordinates are kept as text so they can be parsed exactly.
#[derive(Debug, Deserialize)]
struct CountRecord {
    latitude: String,
    longitude: String,
    count: u64,
}

/// Occurrence record counts keyed by cell.
///
/// Built once from the count table and read-only afterwards.
///
/// # Example
///
/// ```
/// use occgrid_rs::{CellKey, CellOccurrenceCounts, Degrees};
///
/// # fn main() -> Result<(), occgrid_rs::OccGridError> {
/// let table = "-35.10,149.00,17\n-35.20,149.00,3\n";
/// let counts = CellOccurrenceCounts::from_reader(table.as_bytes())?;
///
/// let key = CellKey::new("-35.1".parse()?, Degrees::from_whole(149));
/// assert_eq!(counts.lookup(&key), Some(17));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellOccurrenceCounts {
    counts: HashMap<CellKey, u64>,
}

impl CellOccurrenceCounts {
    /// Reads a headerless CSV count table from disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, OccGridError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| OccGridError::CsvError(format!("{}: {}", path.display(), e)))?;
        let counts = Self::from_reader(file)?;
        debug!("Read {} cell counts from {}", counts.len(), path.display());
        Ok(counts)
    }

    /// Reads a headerless CSV count table.
    ///
    /// Any malformed line or repeated key aborts the whole read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, OccGridError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut counts = HashMap::new();
        for result in reader.records() {
            let record = result.map_err(|e| OccGridError::CsvError(e.to_string()))?;
            let line = record.position().map_or(0, |p| p.line());

            let row: CountRecord = record
                .deserialize(None)
                .map_err(|e| OccGridError::CsvError(format!("line {}: {}", line, e)))?;

            let latitude: Degrees = row.latitude.parse().map_err(|e: OccGridError| {
                OccGridError::CsvError(format!("line {}: latitude {}", line, e))
            })?;
            let longitude: Degrees = row.longitude.parse().map_err(|e: OccGridError| {
                OccGridError::CsvError(format!("line {}: longitude {}", line, e))
            })?;

            if !latitude.is_latitude() {
                return Err(OccGridError::CsvError(format!(
                    "line {}: latitude {} outside -90..90",
                    line, latitude
                )));
            }
            if !longitude.is_longitude() {
                return Err(OccGridError::CsvError(format!(
                    "line {}: longitude {} outside -180..180",
                    line, longitude
                )));
            }

            let key = CellKey::new(latitude, longitude);
            match counts.entry(key) {
                Entry::Occupied(_) => {
                    return Err(OccGridError::DuplicateCell(format!(
                        "{} repeated at line {}",
                        key, line
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(row.count);
                }
            }
        }

        Ok(Self { counts })
    }

    pub fn lookup(&self, key: &CellKey) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CellKey> {
        self.counts.keys()
    }

    pub fn max_count(&self) -> Option<u64> {
        self.counts.values().copied().max()
    }

    /// Extent covering every keyed cell.
    pub fn bounds(&self, resolution: Resolution) -> Result<GridExtent, OccGridError> {
        GridExtent::covering(self.keys(), resolution)
    }

    /// Number of keys whose corner is not a multiple of `resolution`.
    ///
    /// Those keys can never match a generated cell.
    pub fn misaligned_keys(&self, resolution: Resolution) -> usize {
        self.keys()
            .filter(|key| {
                !resolution.is_aligned(key.latitude) || !resolution.is_aligned(key.longitude)
            })
            .count()
    }
}

/// Later entries replace earlier ones for the same key.
impl FromIterator<(CellKey, u64)> for CellOccurrenceCounts {
    fn from_iter<I: IntoIterator<Item = (CellKey, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

use crate::core::cell::{CellKey, CellValue};
use crate::io::counts::CellOccurrenceCounts;

/// Computes the value of a single cell.
///
/// Given the cell key and the running maximum so far, returns the value to
/// write and the updated maximum. The maximum is threaded through every call
/// by the generator, so implementations stay free of shared mutable state.
pub trait CellValueStrategy {
    fn handle_cell(&self, key: &CellKey, max_value: f32) -> (CellValue, f32);
}

impl<F> CellValueStrategy for F
where
    F: Fn(&CellKey, f32) -> (CellValue, f32),
{
    fn handle_cell(&self, key: &CellKey, max_value: f32) -> (CellValue, f32) {
        self(key, max_value)
    }
}

/// Occurrence density: the number of records counted in each cell.
///
/// Cells without an entry are zero density rather than no-data.
#[derive(Debug, Clone)]
pub struct OccurrenceDensity {
    counts: CellOccurrenceCounts,
}

impl OccurrenceDensity {
    pub fn new(counts: CellOccurrenceCounts) -> Self {
        Self { counts }
    }
}

impl CellValueStrategy for OccurrenceDensity {
    fn handle_cell(&self, key: &CellKey, max_value: f32) -> (CellValue, f32) {
        match self.counts.lookup(key) {
            Some(count) => {
                let value = CellValue::Count(count);
                (value, max_value.max(value.as_f32()))
            }
            None => (CellValue::ZERO, max_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::degrees::Degrees;

    fn key(lat: i64, lon: i64) -> CellKey {
        CellKey::new(Degrees::from_whole(lat), Degrees::from_whole(lon))
    }

    fn density() -> OccurrenceDensity {
        OccurrenceDensity::new(
            [(key(0, 0), 5), (key(0, 1), 0), (key(1, 0), 12)]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn test_present_count_raises_max() {
        let (value, max) = density().handle_cell(&key(1, 0), 5.0);
        assert_eq!(value, CellValue::Count(12));
        assert_eq!(max, 12.0);
    }

    #[test]
    fn test_present_count_keeps_larger_max() {
        let (value, max) = density().handle_cell(&key(0, 0), 40.0);
        assert_eq!(value, CellValue::Count(5));
        assert_eq!(max, 40.0);
    }

    #[test]
    fn test_absent_key_is_zero() {
        let (value, max) = density().handle_cell(&key(1, 1), 7.0);
        assert_eq!(value, CellValue::ZERO);
        assert_eq!(max, 7.0);
    }

    #[test]
    fn test_fold_over_keys() {
        let strategy = density();
        let keys = [key(0, 0), key(0, 1), key(1, 0), key(1, 1)];
        let max = keys
            .iter()
            .fold(0.0, |max, k| strategy.handle_cell(k, max).1);
        assert_eq!(max, 12.0);
    }

    #[test]
    fn test_closure_strategy() {
        let constant = |_: &CellKey, max: f32| (CellValue::Value(1.5), max.max(1.5));
        let (value, max) = constant.handle_cell(&key(3, 3), 0.0);
        assert_eq!(value, CellValue::Value(1.5));
        assert_eq!(max, 1.5);
    }
}

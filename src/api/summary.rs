use crate::core::cell::CellValue;
use crate::core::grid::Grid;

/// Statistics of a completed generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSummary {
    pub ncols: usize,
    pub nrows: usize,
    /// Cells written to each output
    pub cells: u64,
    /// Cells whose value is not zero
    pub non_zero_cells: u64,
    pub min_value: f32,
    pub max_value: f32,
}

/// Running counters for one pass. The maximum is threaded through the value
/// strategy instead and handed in on [`GridStats::finish`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridStats {
    cells: u64,
    non_zero_cells: u64,
    min_value: f32,
}

impl GridStats {
    pub(crate) fn new() -> Self {
        Self {
            cells: 0,
            non_zero_cells: 0,
            min_value: f32::INFINITY,
        }
    }

    pub(crate) fn record(&mut self, value: &CellValue) {
        let v = value.as_f32();
        self.cells += 1;
        if v != 0.0 {
            self.non_zero_cells += 1;
        }
        self.min_value = self.min_value.min(v);
    }

    pub(crate) fn finish(self, grid: &Grid, max_value: f32) -> GridSummary {
        GridSummary {
            ncols: grid.ncols(),
            nrows: grid.nrows(),
            cells: self.cells,
            non_zero_cells: self.non_zero_cells,
            min_value: if self.cells == 0 { 0.0 } else { self.min_value },
            max_value,
        }
    }
}

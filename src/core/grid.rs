use crate::core::cell::CellKey;
use crate::core::degrees::{Degrees, Resolution};
use crate::core::extent::GridExtent;

/// Order in which rows are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Northernmost row first, as ESRI ASCII and DIVA grids expect
    #[default]
    NorthToSouth,
    /// Southernmost row first
    SouthToNorth,
}

/// A rectangular lattice of cells over an extent at a fixed resolution.
///
/// # Example
///
/// ```
/// use occgrid_rs::{Grid, GridExtent, Resolution};
///
/// # fn main() -> Result<(), occgrid_rs::OccGridError> {
/// let grid = Grid::new(GridExtent::global(), "0.5".parse::<Resolution>()?);
/// assert_eq!(grid.ncols(), 720);
/// assert_eq!(grid.nrows(), 360);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    extent: GridExtent,
    resolution: Resolution,
    row_order: RowOrder,
    ncols: usize,
    nrows: usize,
}

impl Grid {
    pub fn new(extent: GridExtent, resolution: Resolution) -> Self {
        Self {
            extent,
            resolution,
            row_order: RowOrder::default(),
            ncols: resolution.cells_across(extent.width()),
            nrows: resolution.cells_across(extent.height()),
        }
    }

    pub fn row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    pub fn extent(&self) -> &GridExtent {
        &self.extent
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn order(&self) -> RowOrder {
        self.row_order
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn len(&self) -> usize {
        self.ncols * self.nrows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Eastern edge of the last column. Differs from the extent when the
    /// width is not a whole number of cells.
    pub fn covered_max_lon(&self) -> Degrees {
        self.extent.min_lon() + self.resolution.degrees() * self.ncols as i64
    }

    /// Northern edge of the last row.
    pub fn covered_max_lat(&self) -> Degrees {
        self.extent.min_lat() + self.resolution.degrees() * self.nrows as i64
    }

    /// Latitude of the southern edge of the `row`-th visited row.
    pub fn row_latitude(&self, row: usize) -> Degrees {
        let step = self.resolution.degrees();
        match self.row_order {
            RowOrder::NorthToSouth => self.covered_max_lat() - step * (row as i64 + 1),
            RowOrder::SouthToNorth => self.extent.min_lat() + step * row as i64,
        }
    }

    /// Longitude of the western edge of column `col`.
    pub fn column_longitude(&self, col: usize) -> Degrees {
        self.extent.min_lon() + self.resolution.degrees() * col as i64
    }

    pub fn cell_key(&self, row: usize, col: usize) -> CellKey {
        CellKey::new(self.row_latitude(row), self.column_longitude(col))
    }

    /// Keys of one row, west to east.
    pub fn row(&self, row: usize) -> impl Iterator<Item = CellKey> + '_ {
        let latitude = self.row_latitude(row);
        (0..self.ncols).map(move |col| CellKey::new(latitude, self.column_longitude(col)))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        (0..self.nrows).flat_map(move |row| self.row(row))
    }
}

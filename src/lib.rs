//! # occgrid-rs
//!
//! Generates raster grids with one value per cell over a rectangular extent.
//! Every pass writes the same cells in the same row-major order to two
//! outputs: an ESRI ASCII grid (`.asc`) and a DIVA grid (`.gri` body of
//! little-endian `f32`, `.grd` header).
//!
//! ### 1. `CellOccurrenceCounts` - The Count Table
//!
//! ```
//! use occgrid_rs::{CellKey, CellOccurrenceCounts, Degrees};
//!
//! # fn main() -> Result<(), occgrid_rs::OccGridError> {
//! let counts = CellOccurrenceCounts::from_reader("-35.10,149.00,17\n".as_bytes())?;
//! let key = CellKey::new("-35.1".parse()?, Degrees::from_whole(149));
//! assert_eq!(counts.lookup(&key), Some(17));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Grid` - Extent and Resolution
//!
//! ```
//! use occgrid_rs::{Grid, GridExtent, RowOrder};
//!
//! # fn main() -> Result<(), occgrid_rs::OccGridError> {
//! let grid = Grid::new("110,-45,155,-10".parse::<GridExtent>()?, "0.5".parse()?)
//!     .row_order(RowOrder::NorthToSouth);
//! assert_eq!(grid.len(), 90 * 70);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `RasterGenerator` - Writing the Grids
//!
//! ```no_run
//! use occgrid_rs::{CellOccurrenceCounts, Grid, GridExtent, OccurrenceDensity, RasterGenerator};
//!
//! # fn main() -> Result<(), occgrid_rs::OccGridError> {
//! let counts = CellOccurrenceCounts::from_csv_path("cell_counts.csv")?;
//! let grid = Grid::new(GridExtent::global(), "0.1".parse()?);
//!
//! RasterGenerator::new(grid, OccurrenceDensity::new(counts))
//!     .generate("/data/layers", "occurrence_density")?;
//! # Ok(())
//! # }
//! ```
//!
//! Any `Fn(&CellKey, f32) -> (CellValue, f32)` can stand in for
//! `OccurrenceDensity` as the per-cell strategy.
//!

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use api::{CellValueStrategy, GridFiles, GridSummary, OccurrenceDensity, RasterGenerator};
pub use core::{
    ASC_EXTENSION, CellKey, CellValue, DECIMAL_PLACES, Degrees, GLOBAL_EXTENT, GRD_EXTENSION,
    GRI_EXTENSION, Grid, GridExtent, NODATA_VALUE, Resolution, RowOrder,
};
pub use io::{AscWriter, CellOccurrenceCounts, DivaWriter, read_gri};
pub use util::OccGridError;

pub use geo_types;

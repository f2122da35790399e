pub mod cell;
pub mod constants;
pub mod degrees;
pub mod extent;
pub mod grid;

pub use cell::{CellKey, CellValue};
pub use constants::{
    ASC_EXTENSION, CREATOR, DECIMAL_PLACES, GLOBAL_EXTENT, GRD_EXTENSION, GRI_EXTENSION,
    NODATA_VALUE,
};
pub use degrees::{Degrees, Resolution};
pub use extent::GridExtent;
pub use grid::{Grid, RowOrder};

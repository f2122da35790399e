pub mod generator;
pub mod strategy;
pub mod summary;

pub use generator::{GridFiles, RasterGenerator};
pub use strategy::{CellValueStrategy, OccurrenceDensity};
pub use summary::GridSummary;

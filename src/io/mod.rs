pub mod asc;
pub mod counts;
pub mod diva;

pub use asc::{AscWriter, write_asc_header};
pub use counts::CellOccurrenceCounts;
pub use diva::{DivaWriter, read_gri, write_grd_header};

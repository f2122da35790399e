pub mod error;

pub use error::OccGridError;

/// Error type for occgrid-rs operations.
#[derive(Debug, PartialEq)]
pub enum OccGridError {
    /// The resolution is not a positive value with at most two decimal places.
    InvalidResolution(String),
    /// A coordinate could not be parsed as an exact two-decimal degree value.
    InvalidCoordinate(String),
    /// The grid extent is empty or inverted.
    InvalidExtent(String),
    /// The same cell key appears more than once in the count table.
    DuplicateCell(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// File I/O error while writing grid output.
    IoError(String),
    /// The output directory is missing or not a directory.
    OutputDirectory(String),
}

impl std::fmt::Display for OccGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccGridError::InvalidResolution(msg) => write!(f, "Invalid resolution: {}", msg),
            OccGridError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            OccGridError::InvalidExtent(msg) => write!(f, "Invalid extent: {}", msg),
            OccGridError::DuplicateCell(msg) => write!(f, "Duplicate cell: {}", msg),
            OccGridError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            OccGridError::IoError(msg) => write!(f, "IO error: {}", msg),
            OccGridError::OutputDirectory(msg) => write!(f, "Output directory error: {}", msg),
        }
    }
}

impl std::error::Error for OccGridError {}

impl From<std::io::Error> for OccGridError {
    fn from(err: std::io::Error) -> Self {
        OccGridError::IoError(err.to_string())
    }
}

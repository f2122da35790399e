/// Number of decimal places carried by every coordinate and resolution
pub const DECIMAL_PLACES: u32 = 2;

/// Scale factor between whole degrees and the stored fixed-point units
pub(crate) const SCALE_FACTOR: i64 = 100;

/// Global extent in degrees [min_lon, min_lat, max_lon, max_lat]
pub const GLOBAL_EXTENT: [i64; 4] = [-180, -90, 180, 90];

/// Largest resolution in whole degrees; one cell spanning the whole globe
pub const MAX_RESOLUTION: i64 = 360;

/// No-data marker written to grid headers
pub const NODATA_VALUE: i32 = -9999;

/// Extension of the ESRI ASCII grid
pub const ASC_EXTENSION: &str = "asc";

/// Extension of the DIVA binary grid body
pub const GRI_EXTENSION: &str = "gri";

/// Extension of the DIVA grid header
pub const GRD_EXTENSION: &str = "grd";

/// Value written to the `Creator` key of DIVA headers
pub const CREATOR: &str = "occgrid-rs";

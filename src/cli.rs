use clap::Parser;
use occgrid_rs::{GridExtent, Resolution};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "occgrid")]
#[command(about = "Generate occurrence density grids (ESRI ASCII and DIVA) from cell record counts")]
#[command(version)]
pub struct Args {
    /// Resolution in degrees, e.g. 0.1 for 0.1 by 0.1 degree cells
    #[arg(value_name = "RESOLUTION")]
    pub resolution: Option<Resolution>,

    /// Cell occurrence counts file (latitude,longitude,count); must be keyed at RESOLUTION
    #[arg(value_name = "COUNTS_FILE")]
    pub counts_file: Option<PathBuf>,

    /// Directory in which to write the output files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix for the output file names
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Grid extent as MIN_LON,MIN_LAT,MAX_LON,MAX_LAT (default: whole globe)
    #[arg(long, value_name = "BOUNDS", conflicts_with = "fit_to_source")]
    pub extent: Option<GridExtent>,

    /// Derive the extent from the cells present in the counts file
    #[arg(long)]
    pub fit_to_source: bool,

    /// Write the southernmost row first
    #[arg(long)]
    pub south_up: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// The four positional inputs, once all of them are present.
pub struct Inputs {
    pub resolution: Resolution,
    pub counts_file: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
}

impl Args {
    /// `None` when no positional arguments were given at all.
    pub fn inputs(&self) -> Option<Inputs> {
        Some(Inputs {
            resolution: self.resolution?,
            counts_file: self.counts_file.clone()?,
            output_dir: self.output_dir.clone()?,
            prefix: self.prefix.clone()?,
        })
    }

    pub fn has_any_input(&self) -> bool {
        self.resolution.is_some()
            || self.counts_file.is_some()
            || self.output_dir.is_some()
            || self.prefix.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["occgrid"]);
        assert!(!args.has_any_input());
        assert!(args.inputs().is_none());
    }

    #[test]
    fn test_positional_arguments() {
        let args = Args::parse_from(["occgrid", "0.1", "counts.csv", "/tmp/out", "density"]);
        let inputs = args.inputs().unwrap();
        assert_eq!(inputs.resolution.hundredths(), 10);
        assert_eq!(inputs.counts_file, PathBuf::from("counts.csv"));
        assert_eq!(inputs.prefix, "density");
        assert!(!args.fit_to_source);
    }

    #[test]
    fn test_partial_arguments() {
        let args = Args::parse_from(["occgrid", "0.1", "counts.csv"]);
        assert!(args.has_any_input());
        assert!(args.inputs().is_none());
    }

    #[test]
    fn test_invalid_resolution_rejected() {
        let result = Args::try_parse_from(["occgrid", "0.125", "c.csv", "out", "p"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extent_option() {
        let args = Args::parse_from([
            "occgrid",
            "0.5",
            "c.csv",
            "out",
            "p",
            "--extent",
            "110,-45,155,-10",
        ]);
        let extent = args.extent.unwrap();
        assert_eq!(extent.min_lon().to_string(), "110.00");
    }

    #[test]
    fn test_off_globe_extent_rejected() {
        let result = Args::try_parse_from([
            "occgrid",
            "0.5",
            "c.csv",
            "out",
            "p",
            "--extent=-90000000000000000,0,90000000000000000,1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extent_conflicts_with_fit() {
        let result = Args::try_parse_from([
            "occgrid",
            "0.5",
            "c.csv",
            "out",
            "p",
            "--extent",
            "0,0,1,1",
            "--fit-to-source",
        ]);
        assert!(result.is_err());
    }
}

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{info, warn};
use occgrid_rs::{
    CellOccurrenceCounts, Grid, GridExtent, OccGridError, OccurrenceDensity, RasterGenerator,
    RowOrder,
};

mod cli;

use cli::Args;

fn main() -> Result<(), OccGridError> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if !args.has_any_input() {
        Args::command().print_help()?;
        return Ok(());
    }

    let Some(inputs) = args.inputs() else {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "RESOLUTION, COUNTS_FILE, OUTPUT_DIR and PREFIX are all required",
            )
            .exit();
    };

    info!("Reading cell counts: {}", inputs.counts_file.display());
    let counts = CellOccurrenceCounts::from_csv_path(&inputs.counts_file)?;
    match counts.max_count() {
        Some(max) => info!("Loaded {} cells, largest count {}", counts.len(), max),
        None => warn!("{} holds no cells; every cell will be zero", inputs.counts_file.display()),
    }

    let misaligned = counts.misaligned_keys(inputs.resolution);
    if misaligned > 0 {
        warn!(
            "{} cells are not aligned to resolution {} and will not appear in the grid",
            misaligned, inputs.resolution
        );
    }

    let extent = match (args.extent, args.fit_to_source) {
        (Some(extent), _) => extent,
        (None, true) => counts.bounds(inputs.resolution)?,
        (None, false) => GridExtent::global(),
    };
    let row_order = if args.south_up {
        RowOrder::SouthToNorth
    } else {
        RowOrder::NorthToSouth
    };
    let grid = Grid::new(extent, inputs.resolution).row_order(row_order);

    let generator = RasterGenerator::new(grid, OccurrenceDensity::new(counts));
    let (summary, files) = generator.generate_files(&inputs.output_dir, &inputs.prefix)?;

    info!(
        "Done: {} ({} x {}, {} non-zero cells, max {})",
        files.asc.display(),
        summary.ncols,
        summary.nrows,
        summary.non_zero_cells,
        summary.max_value
    );
    Ok(())
}

use crate::api::strategy::CellValueStrategy;
use crate::api::summary::{GridStats, GridSummary};
use crate::core::grid::Grid;
use crate::io::asc::AscWriter;
use crate::io::diva::DivaWriter;
use crate::util::error::OccGridError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Paths written by one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFiles {
    pub asc: PathBuf,
    pub gri: PathBuf,
    pub grd: PathBuf,
}

/// Drives one pass over a grid and writes the ASCII and DIVA outputs together.
///
/// # Example
///
/// ```no_run
/// use occgrid_rs::{CellOccurrenceCounts, Grid, GridExtent, OccurrenceDensity, RasterGenerator};
///
/// # fn main() -> Result<(), occgrid_rs::OccGridError> {
/// let resolution = "0.1".parse()?;
/// let counts = CellOccurrenceCounts::from_csv_path("cell_counts.csv")?;
/// let grid = Grid::new(GridExtent::global(), resolution);
///
/// let generator = RasterGenerator::new(grid, OccurrenceDensity::new(counts));
/// let summary = generator.generate("/data/layers", "occurrence_density")?;
/// println!("max density {}", summary.max_value);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RasterGenerator<S> {
    grid: Grid,
    strategy: S,
}

impl<S: CellValueStrategy> RasterGenerator<S> {
    pub fn new(grid: Grid, strategy: S) -> Self {
        Self { grid, strategy }
    }

    /// Writes `<prefix>.asc`, `<prefix>.gri` and `<prefix>.grd` into `output_dir`.
    ///
    /// Existing files are overwritten. On error, files already created are
    /// left as they are; the temporary ASCII body is always removed.
    pub fn generate(
        &self,
        output_dir: impl AsRef<Path>,
        prefix: &str,
    ) -> Result<GridSummary, OccGridError> {
        self.generate_files(output_dir, prefix)
            .map(|(summary, _)| summary)
    }

    /// Same as [`RasterGenerator::generate`], also returning the written paths.
    pub fn generate_files(
        &self,
        output_dir: impl AsRef<Path>,
        prefix: &str,
    ) -> Result<(GridSummary, GridFiles), OccGridError> {
        let output_dir = output_dir.as_ref();
        if !output_dir.is_dir() {
            return Err(OccGridError::OutputDirectory(format!(
                "{} is not a directory",
                output_dir.display()
            )));
        }

        info!(
            "Generating {}x{} grid at {} into {}",
            self.grid.ncols(),
            self.grid.nrows(),
            self.grid.resolution(),
            output_dir.display()
        );

        let mut asc = AscWriter::create(output_dir, prefix)?;
        let mut diva = DivaWriter::create(output_dir, prefix)?;

        let mut stats = GridStats::new();
        let mut max_value = 0.0_f32;
        for row in 0..self.grid.nrows() {
            for key in self.grid.row(row) {
                let (value, new_max) = self.strategy.handle_cell(&key, max_value);
                max_value = new_max;
                asc.write_cell(&value)?;
                diva.write_cell(&value)?;
                stats.record(&value);
            }
            asc.end_row()?;
        }

        let summary = stats.finish(&self.grid, max_value);
        debug!(
            "Pass complete: {} cells, {} non-zero, max {}",
            summary.cells, summary.non_zero_cells, summary.max_value
        );

        let asc_path = asc.finish(&self.grid)?;
        let (gri_path, grd_path) = diva.finish(&self.grid, &summary)?;

        info!(
            "Wrote {} cells to {}, max value {}",
            summary.cells,
            asc_path.display(),
            summary.max_value
        );

        Ok((
            summary,
            GridFiles {
                asc: asc_path,
                gri: gri_path,
                grd: grd_path,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::strategy::OccurrenceDensity;
    use crate::core::cell::{CellKey, CellValue};
    use crate::core::degrees::Degrees;
    use crate::core::grid::RowOrder;
    use crate::io::counts::CellOccurrenceCounts;
    use crate::io::diva::read_gri;
    use tempfile::tempdir;

    fn key(lat: i64, lon: i64) -> CellKey {
        CellKey::new(Degrees::from_whole(lat), Degrees::from_whole(lon))
    }

    fn asc_body(path: &Path) -> Result<Vec<String>, OccGridError> {
        let text = std::fs::read_to_string(path)?;
        Ok(text.lines().skip(6).map(str::to_string).collect())
    }

    #[test]
    fn test_scenario_two_by_two() -> Result<(), OccGridError> {
        let counts: CellOccurrenceCounts = [(key(0, 0), 5), (key(0, 1), 0), (key(1, 0), 12)]
            .into_iter()
            .collect();
        let grid =
            Grid::new("0,0,2,2".parse()?, "1".parse()?).row_order(RowOrder::SouthToNorth);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(counts));

        let dir = tempdir()?;
        let (summary, files) = generator.generate_files(dir.path(), "density")?;

        assert_eq!(asc_body(&files.asc)?, vec!["5 0", "12 0"]);
        assert_eq!(read_gri(&files.gri)?, vec![5.0, 0.0, 12.0, 0.0]);
        assert_eq!(summary.max_value, 12.0);
        assert_eq!(summary.cells, 4);
        assert_eq!(summary.non_zero_cells, 2);
        Ok(())
    }

    #[test]
    fn test_north_up_is_default() -> Result<(), OccGridError> {
        let counts: CellOccurrenceCounts = [(key(0, 0), 5), (key(1, 0), 12)].into_iter().collect();
        let grid = Grid::new("0,0,2,2".parse()?, "1".parse()?);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(counts));

        let dir = tempdir()?;
        let (_, files) = generator.generate_files(dir.path(), "density")?;
        assert_eq!(asc_body(&files.asc)?, vec!["12 0", "5 0"]);
        Ok(())
    }

    #[test]
    fn test_empty_source_max_is_zero() -> Result<(), OccGridError> {
        let grid = Grid::new("0,0,3,1".parse()?, "1".parse()?);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(Default::default()));

        let dir = tempdir()?;
        let (summary, files) = generator.generate_files(dir.path(), "empty")?;
        assert_eq!(summary.max_value, 0.0);
        assert_eq!(summary.min_value, 0.0);
        assert_eq!(asc_body(&files.asc)?, vec!["0 0 0"]);
        assert_eq!(read_gri(&files.gri)?, vec![0.0; 3]);

        let grd = std::fs::read_to_string(&files.grd)?;
        assert!(grd.contains("MaxValue=0\n"));
        Ok(())
    }

    #[test]
    fn test_closure_strategy_values() -> Result<(), OccGridError> {
        let grid = Grid::new("0,0,2,1".parse()?, "1".parse()?);
        let half_longitude = |key: &CellKey, max: f32| {
            let v = key.longitude.to_f64() as f32 / 2.0;
            (CellValue::Value(v), max.max(v))
        };
        let generator = RasterGenerator::new(grid, half_longitude);

        let dir = tempdir()?;
        let (summary, files) = generator.generate_files(dir.path(), "half")?;
        assert_eq!(asc_body(&files.asc)?, vec!["0 0.5"]);
        assert_eq!(summary.max_value, 0.5);
        Ok(())
    }

    #[test]
    fn test_missing_output_dir() -> Result<(), OccGridError> {
        let dir = tempdir()?;
        let grid = Grid::new("0,0,1,1".parse()?, "1".parse()?);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(Default::default()));

        let result = generator.generate(dir.path().join("absent"), "density");
        assert!(matches!(result, Err(OccGridError::OutputDirectory(_))));
        Ok(())
    }

    #[test]
    fn test_unwritable_binary_body_cleans_up() -> Result<(), OccGridError> {
        let dir = tempdir()?;
        std::fs::create_dir(dir.path().join("density.gri"))?;
        let grid = Grid::new("0,0,2,2".parse()?, "1".parse()?);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(Default::default()));

        let result = generator.generate_files(dir.path(), "density");
        assert!(matches!(result, Err(OccGridError::IoError(_))));

        let mut names: Vec<String> = std::fs::read_dir(dir.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<_, _>>()?;
        names.sort();
        assert_eq!(names, vec!["density.gri"]);
        assert!(!dir.path().join("density.asc").exists());
        Ok(())
    }

    #[test]
    fn test_repeat_generation_is_identical() -> Result<(), OccGridError> {
        let counts: CellOccurrenceCounts = [(key(0, 0), 3)].into_iter().collect();
        let grid = Grid::new("0,0,2,2".parse()?, "1".parse()?);
        let generator = RasterGenerator::new(grid, OccurrenceDensity::new(counts));

        let dir = tempdir()?;
        let (_, first) = generator.generate_files(dir.path(), "density")?;
        let asc_before = std::fs::read(&first.asc)?;
        let gri_before = std::fs::read(&first.gri)?;
        let (_, second) = generator.generate_files(dir.path(), "density")?;

        assert_eq!(std::fs::read(&second.asc)?, asc_before);
        assert_eq!(std::fs::read(&second.gri)?, gri_before);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 3);
        Ok(())
    }
}

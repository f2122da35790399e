use crate::api::summary::GridSummary;
use crate::core::cell::CellValue;
use crate::core::constants::{CREATOR, GRD_EXTENSION, GRI_EXTENSION, NODATA_VALUE};
use crate::core::grid::Grid;
use crate::util::error::OccGridError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Streams a DIVA grid: a `.gri` body of little-endian `f32` cells and a
/// `.grd` header written once the pass is complete.
pub struct DivaWriter {
    gri_path: PathBuf,
    grd_path: PathBuf,
    title: String,
    body: BufWriter<File>,
}

impl DivaWriter {
    pub fn create(output_dir: &Path, prefix: &str) -> Result<Self, OccGridError> {
        let gri_path = output_dir.join(format!("{}.{}", prefix, GRI_EXTENSION));
        let grd_path = output_dir.join(format!("{}.{}", prefix, GRD_EXTENSION));
        let file = File::create(&gri_path)
            .map_err(|e| OccGridError::IoError(format!("{}: {}", gri_path.display(), e)))?;

        Ok(Self {
            gri_path,
            grd_path,
            title: prefix.to_string(),
            body: BufWriter::new(file),
        })
    }

    pub fn write_cell(&mut self, value: &CellValue) -> Result<(), OccGridError> {
        self.body.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    /// Flushes the body and writes the header. Returns the `.gri` and `.grd` paths.
    pub fn finish(
        mut self,
        grid: &Grid,
        summary: &GridSummary,
    ) -> Result<(PathBuf, PathBuf), OccGridError> {
        self.body.flush()?;
        drop(self.body);

        let file = File::create(&self.grd_path)
            .map_err(|e| OccGridError::IoError(format!("{}: {}", self.grd_path.display(), e)))?;
        let mut out = BufWriter::new(file);
        write_grd_header(&mut out, grid, summary, &self.title)?;
        out.flush()?;

        debug!(
            "Wrote {} and {}",
            self.gri_path.display(),
            self.grd_path.display()
        );
        Ok((self.gri_path, self.grd_path))
    }
}

/// Writes the DIVA `.grd` header describing a `FLT4S` body.
pub fn write_grd_header<W: Write>(
    writer: &mut W,
    grid: &Grid,
    summary: &GridSummary,
    title: &str,
) -> Result<(), OccGridError> {
    let extent = grid.extent();
    let resolution = grid.resolution();

    writeln!(writer, "[General]")?;
    writeln!(writer, "Creator={}", CREATOR)?;
    writeln!(writer, "Title={}", title)?;
    writeln!(writer, "[GeoReference]")?;
    writeln!(writer, "Projection=GEOGRAPHIC")?;
    writeln!(writer, "Datum=WGS84")?;
    writeln!(writer, "Mapunits=DEGREES")?;
    writeln!(writer, "Columns={}", grid.ncols())?;
    writeln!(writer, "Rows={}", grid.nrows())?;
    writeln!(writer, "MinX={}", extent.min_lon())?;
    writeln!(writer, "MaxX={}", grid.covered_max_lon())?;
    writeln!(writer, "MinY={}", extent.min_lat())?;
    writeln!(writer, "MaxY={}", grid.covered_max_lat())?;
    writeln!(writer, "ResolutionX={}", resolution)?;
    writeln!(writer, "ResolutionY={}", resolution)?;
    writeln!(writer, "[Data]")?;
    writeln!(writer, "DataType=FLT4S")?;
    writeln!(writer, "ByteOrder=LSB")?;
    writeln!(writer, "MinValue={}", summary.min_value)?;
    writeln!(writer, "MaxValue={}", summary.max_value)?;
    writeln!(writer, "NoDataValue={}", NODATA_VALUE)?;
    writeln!(writer, "Transparent=0")?;
    writeln!(writer, "Units=")?;
    Ok(())
}

/// Reads a `.gri` body back into cell values.
pub fn read_gri(path: impl AsRef<Path>) -> Result<Vec<f32>, OccGridError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| OccGridError::IoError(format!("{}: {}", path.display(), e)))?;
    if bytes.len() % 4 != 0 {
        return Err(OccGridError::IoError(format!(
            "{}: length {} is not a whole number of f32 cells",
            path.display(),
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

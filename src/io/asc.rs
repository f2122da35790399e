use crate::core::cell::CellValue;
use crate::core::constants::{ASC_EXTENSION, NODATA_VALUE};
use crate::core::grid::Grid;
use crate::util::error::OccGridError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Streams an ESRI ASCII grid.
///
/// Cell tokens go to a temporary body file in the output directory. The
/// header is written on [`AscWriter::finish`], once the whole pass is done,
/// and the body is copied in after it. Dropping the writer without finishing
/// removes the temporary body and leaves no `.asc` behind.
pub struct AscWriter {
    path: PathBuf,
    body: BufWriter<NamedTempFile>,
    column: usize,
}

impl AscWriter {
    pub fn create(output_dir: &Path, prefix: &str) -> Result<Self, OccGridError> {
        let path = output_dir.join(format!("{}.{}", prefix, ASC_EXTENSION));
        let body = tempfile::Builder::new()
            .prefix(&format!(".{}-", prefix))
            .suffix(".asc.body")
            .tempfile_in(output_dir)
            .map_err(|e| OccGridError::IoError(format!("{}: {}", output_dir.display(), e)))?;

        Ok(Self {
            path,
            body: BufWriter::new(body),
            column: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_cell(&mut self, value: &CellValue) -> Result<(), OccGridError> {
        if self.column > 0 {
            self.body.write_all(b" ")?;
        }
        write!(self.body, "{}", value)?;
        self.column += 1;
        Ok(())
    }

    pub fn end_row(&mut self) -> Result<(), OccGridError> {
        self.body.write_all(b"\n")?;
        self.column = 0;
        Ok(())
    }

    /// Writes the header for `grid` followed by the buffered body.
    pub fn finish(self, grid: &Grid) -> Result<PathBuf, OccGridError> {
        let mut body = self
            .body
            .into_inner()
            .map_err(|e| OccGridError::IoError(e.error().to_string()))?;
        body.seek(SeekFrom::Start(0))?;

        let file = File::create(&self.path)
            .map_err(|e| OccGridError::IoError(format!("{}: {}", self.path.display(), e)))?;
        let mut out = BufWriter::new(file);
        write_asc_header(&mut out, grid)?;
        let copied = std::io::copy(&mut body, &mut out)?;
        out.flush()?;

        debug!("Wrote {} ({} body bytes)", self.path.display(), copied);
        Ok(self.path)
    }
}

/// Writes the six-line ESRI ASCII grid header.
pub fn write_asc_header<W: Write>(writer: &mut W, grid: &Grid) -> Result<(), OccGridError> {
    let extent = grid.extent();
    writeln!(writer, "ncols {}", grid.ncols())?;
    writeln!(writer, "nrows {}", grid.nrows())?;
    writeln!(writer, "xllcorner {}", extent.min_lon())?;
    writeln!(writer, "yllcorner {}", extent.min_lat())?;
    writeln!(writer, "cellsize {}", grid.resolution())?;
    writeln!(writer, "NODATA_value {}", NODATA_VALUE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extent::GridExtent;
    use tempfile::tempdir;

    fn grid() -> Result<Grid, OccGridError> {
        Ok(Grid::new("-1,-0.5,1,0.5".parse::<GridExtent>()?, "0.5".parse()?))
    }

    #[test]
    fn test_header() -> Result<(), OccGridError> {
        let mut buf = Vec::new();
        write_asc_header(&mut buf, &grid()?)?;
        let text = String::from_utf8(buf).map_err(|e| OccGridError::IoError(e.to_string()))?;
        assert_eq!(
            text,
            "ncols 4\nnrows 2\nxllcorner -1.00\nyllcorner -0.50\ncellsize 0.50\nNODATA_value -9999\n"
        );
        Ok(())
    }

    #[test]
    fn test_header_precedes_body() -> Result<(), OccGridError> {
        let dir = tempdir()?;
        let mut writer = AscWriter::create(dir.path(), "density")?;
        writer.write_cell(&CellValue::Count(3))?;
        writer.write_cell(&CellValue::ZERO)?;
        writer.end_row()?;
        writer.write_cell(&CellValue::Value(0.5))?;
        writer.write_cell(&CellValue::Count(10))?;
        writer.end_row()?;
        let path = writer.finish(&grid()?)?;

        assert_eq!(path, dir.path().join("density.asc"));
        let text = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "ncols 4");
        assert_eq!(lines[6], "3 0");
        assert_eq!(lines[7], "0.5 10");
        Ok(())
    }

    #[test]
    fn test_temp_body_removed() -> Result<(), OccGridError> {
        let dir = tempdir()?;
        let mut writer = AscWriter::create(dir.path(), "density")?;
        writer.write_cell(&CellValue::Count(1))?;
        writer.end_row()?;
        writer.finish(&grid()?)?;

        let names: Vec<String> = std::fs::read_dir(dir.path())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["density.asc".to_string()]);
        Ok(())
    }

    #[test]
    fn test_abandoned_writer_leaves_nothing() -> Result<(), OccGridError> {
        let dir = tempdir()?;
        {
            let mut writer = AscWriter::create(dir.path(), "density")?;
            writer.write_cell(&CellValue::Count(1))?;
        }
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }
}

//! Square heightmap grid and its plain-text serialization.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A square grid of height samples in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    size: u32,
    values: Vec<f64>,
}

impl Heightmap {
    /// Wraps row-major `values` as a `size`x`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not `size * size`.
    #[must_use]
    pub fn from_values(size: u32, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            size as usize * size as usize,
            "value count must match the grid size"
        );
        Self { size, values }
    }

    /// Grid width and height, in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Height at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: u32, column: u32) -> f64 {
        self.values[row as usize * self.size as usize + column as usize]
    }

    /// Iterates the grid one row at a time.
    #[must_use]
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size as usize)
    }

    /// Writes the grid as text: one line per row, cells space-separated
    /// in decimal form, no header or footer.
    pub fn write_text<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for row in self.rows() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b" ")?;
                }
                write!(writer, "{value}")?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes the grid to the file at `path`, creating or truncating it.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_text(&mut writer)?;
        writer.flush()
    }
}

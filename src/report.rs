use std::fmt::Display;
use std::io::Write;

use crate::bitmap::coordinates::Coordinate;
use crate::bitmap::{Image, PixelSample};
use crate::error::Error;
use crate::Result;

/// One line of the report: `Pixel at (x, y) - R: r, G: g, B: b`.
pub struct ReportLine {
    coordinate: Coordinate,
    sample: PixelSample,
}

impl ReportLine {
    pub fn new(coordinate: Coordinate, sample: PixelSample) -> Self {
        Self { coordinate, sample }
    }
}

impl Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pixel at ({}, {}) - {}",
            self.coordinate.x, self.coordinate.y, self.sample
        )
    }
}

pub struct PixelReporter<'a, W> {
    image: &'a Image,
    writer: &'a mut W,
}

impl<'a, W: Write> PixelReporter<'a, W> {
    pub fn new(image: &'a Image, writer: &'a mut W) -> PixelReporter<'a, W> {
        PixelReporter { image, writer }
    }

    /// Writes one line per pixel in row-major order and returns the number
    /// of lines written. Stops at the first failing pixel; lines written
    /// before it are kept.
    pub fn report(&mut self) -> Result<u64> {
        let mut number_of_lines = 0;
        for coordinate in self.image.coordinates() {
            let sample = self.image.pixel(coordinate.x, coordinate.y)?;
            self.write_line(&ReportLine::new(coordinate, sample))?;
            number_of_lines += 1;
        }
        Ok(number_of_lines)
    }

    fn write_line(&mut self, line: &ReportLine) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(Error::FailedToWritePixelReport)
    }
}

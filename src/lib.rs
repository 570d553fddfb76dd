use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

pub use bitmap::{ChannelLayout, Image, PixelSample};
pub use cli::CLIParser;
pub use error::{Error, ErrorKind};
pub use report::PixelReporter;

pub mod bitmap;
mod cli;
mod error;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
}

/// Opens `input_file` and writes its pixel report to `writer`.
pub fn write_pixel_report<W: Write>(input_file: &Path, writer: &mut W) -> Result<u64> {
    let image = Image::open(input_file)?;
    logger::log_opened_image(input_file, &image);
    let number_of_lines = PixelReporter::new(&image, writer).report()?;
    logger::log_report_summary(input_file, number_of_lines);
    Ok(number_of_lines)
}

/// Writes the pixel report of the input file to standard output.
pub fn report_pixels(arguments: &Arguments) -> Result<u64> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let number_of_lines = write_pixel_report(&arguments.input_file, &mut writer)?;
    writer.flush().map_err(Error::FailedToWritePixelReport)?;
    Ok(number_of_lines)
}

use std::fmt::Display;

use image::{ColorType, ImageError};

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDetectImageFormat(String),
    UnsupportedImageFormat(String, ImageError),
    FailedToDecodeImage(String, ImageError),
    UnsupportedColorLayout(ColorType),
    IndexedColorLayout(String),
    ImageHasNoPixels(u32, u32),
    PixelOutOfBounds(u32, u32),
    FailedToWritePixelReport(std::io::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or decoded into a supported image.
    Decode,
    /// The channel values of a single coordinate could not be retrieved.
    PixelAccess,
    /// The report could not be written to the output stream.
    Output,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputFileNotFound(_)
            | Self::NoReadPermissionForInputFile(_)
            | Self::UnableToOpenInputFileForReading(_, _)
            | Self::UnableToDetectImageFormat(_)
            | Self::UnsupportedImageFormat(_, _)
            | Self::FailedToDecodeImage(_, _)
            | Self::UnsupportedColorLayout(_)
            | Self::IndexedColorLayout(_)
            | Self::ImageHasNoPixels(_, _) => ErrorKind::Decode,
            Self::PixelOutOfBounds(_, _) => ErrorKind::PixelAccess,
            Self::FailedToWritePixelReport(_) => ErrorKind::Output,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDetectImageFormat(path) => {
                write!(f, "Unable to detect the image format of '{}'", path)
            }
            Self::UnsupportedImageFormat(path, error) => {
                write!(f, "Image format of '{}' is not supported: {}", path, error)
            }
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Failed to decode image '{}': {}", path, error)
            }
            Self::UnsupportedColorLayout(color_type) => {
                write!(
                    f,
                    "Color layout {:?} does not provide red, green and blue channels",
                    color_type
                )
            }
            Self::IndexedColorLayout(path) => {
                write!(
                    f,
                    "Image '{}' uses a color palette instead of red, green and blue channels",
                    path
                )
            }
            Self::ImageHasNoPixels(width, height) => {
                write!(f, "Image of size {}x{} contains no pixels", width, height)
            }
            Self::PixelOutOfBounds(x, y) => {
                write!(f, "No pixel at ({}, {}) in the image", x, y)
            }
            Self::FailedToWritePixelReport(error) => {
                write!(f, "Failed to write pixel report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::FailedToWritePixelReport(error) => Some(error),
            Self::UnsupportedImageFormat(_, error) | Self::FailedToDecodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}

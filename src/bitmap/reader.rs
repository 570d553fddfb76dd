use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek};
use std::path::Path;

use image::{
    DynamicImage, ExtendedColorType, ImageDecoder, ImageError, ImageReader as CodecReader,
};

use super::Image;
use crate::error::Error;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

/// Decodes any raster format known to the `image` codecs. The format is
/// guessed from the content, not from the file name.
pub struct CodecImageReader<R: BufRead + Seek> {
    reader: R,
    source_name: String,
}

impl<R: BufRead + Seek> CodecImageReader<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
        }
    }
}

impl CodecImageReader<BufReader<File>> {
    pub fn open(file_path: &Path) -> crate::Result<Self> {
        let file = open_input_file(file_path)?;
        Ok(Self::new(
            BufReader::new(file),
            file_path.display().to_string(),
        ))
    }
}

impl<R: BufRead + Seek> ImageReader for CodecImageReader<R> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let source_name = &self.source_name;
        let codec = CodecReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::UnableToOpenInputFileForReading(source_name.clone(), e))?;
        let format = codec
            .format()
            .ok_or_else(|| Error::UnableToDetectImageFormat(source_name.clone()))?;
        log::debug!("Decoding '{}' as {:?}", source_name, format);
        let decoder = codec
            .into_decoder()
            .map_err(|error| map_decoding_error(source_name, error))?;
        // Palette-indexed sources report an unknown original color type.
        if let ExtendedColorType::Unknown(_) = decoder.original_color_type() {
            return Err(Error::IndexedColorLayout(source_name.clone()));
        }
        let decoded = DynamicImage::from_decoder(decoder)
            .map_err(|error| map_decoding_error(source_name, error))?;
        Image::try_from(decoded)
    }
}

fn map_decoding_error(source_name: &str, error: ImageError) -> Error {
    match error {
        ImageError::Unsupported(_) => Error::UnsupportedImageFormat(source_name.to_owned(), error),
        _ => Error::FailedToDecodeImage(source_name.to_owned(), error),
    }
}

fn open_input_file(file_path: &Path) -> crate::Result<File> {
    File::open(file_path).map_err(|e| {
        let path = file_path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => Error::InputFileNotFound(path),
            io::ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(path),
            _ => Error::UnableToOpenInputFileForReading(path, e),
        }
    })
}

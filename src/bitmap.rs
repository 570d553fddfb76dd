use std::fmt::Display;
use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::Error;
use crate::Result;

pub mod coordinates;
pub mod reader;

use coordinates::RowMajorCoordinates;
use reader::{CodecImageReader, ImageReader};

/// Channel layout of the decoded source, before 16-bit samples are narrowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb8,
    Rgba8,
    Rgb16,
    Rgba16,
}

#[derive(Debug)]
enum Samples {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// Red, green and blue value of a single pixel. Transparency is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PixelSample {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    fn from_channels(channels: &[u8]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl Display for PixelSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R: {}, G: {}, B: {}", self.red, self.green, self.blue)
    }
}

/// Keeps the high byte of a 16-bit channel value.
fn narrow_channel(value: u16) -> u8 {
    (value >> 8) as u8
}

/// A decoded image whose pixels can be read as [`PixelSample`]s.
#[derive(Debug)]
pub struct Image {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Samples,
}

impl Image {
    pub fn open(file_path: &Path) -> Result<Self> {
        CodecImageReader::open(file_path)?.read_image()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn coordinates(&self) -> RowMajorCoordinates {
        RowMajorCoordinates::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<PixelSample> {
        let sample = match &self.samples {
            Samples::Rgb(buffer) => buffer
                .get_pixel_checked(x, y)
                .map(|pixel| PixelSample::from_channels(&pixel.0)),
            Samples::Rgba(buffer) => buffer
                .get_pixel_checked(x, y)
                .map(|pixel| PixelSample::from_channels(&pixel.0)),
        };
        sample.ok_or(Error::PixelOutOfBounds(x, y))
    }
}

impl TryFrom<DynamicImage> for Image {
    type Error = Error;

    fn try_from(image: DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::ImageHasNoPixels(width, height));
        }
        let (layout, samples) = match image {
            DynamicImage::ImageRgb8(buffer) => (ChannelLayout::Rgb8, Samples::Rgb(buffer)),
            DynamicImage::ImageRgba8(buffer) => (ChannelLayout::Rgba8, Samples::Rgba(buffer)),
            DynamicImage::ImageRgb16(buffer) => {
                let narrowed = RgbImage::from_fn(width, height, |x, y| {
                    Rgb(buffer.get_pixel(x, y).0.map(narrow_channel))
                });
                (ChannelLayout::Rgb16, Samples::Rgb(narrowed))
            }
            DynamicImage::ImageRgba16(buffer) => {
                let narrowed = RgbaImage::from_fn(width, height, |x, y| {
                    Rgba(buffer.get_pixel(x, y).0.map(narrow_channel))
                });
                (ChannelLayout::Rgba16, Samples::Rgba(narrowed))
            }
            other => return Err(Error::UnsupportedColorLayout(other.color())),
        };
        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use image::{
        ColorType, DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage,
    };

    use super::{ChannelLayout, Image, PixelSample};
    use crate::error::{Error, ErrorKind};

    #[test]
    fn read_rgb8_pixel() {
        let mut buffer = RgbImage::new(2, 2);
        buffer.put_pixel(1, 0, Rgb([255, 128, 0]));
        let image = Image::try_from(DynamicImage::ImageRgb8(buffer)).unwrap();
        assert_eq!(image.channel_layout(), ChannelLayout::Rgb8);
        assert_eq!(image.pixel(1, 0).unwrap(), PixelSample::new(255, 128, 0));
        assert_eq!(image.pixel(0, 1).unwrap(), PixelSample::new(0, 0, 0));
    }

    #[test]
    fn drop_alpha_channel() {
        let buffer = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
        let image = Image::try_from(DynamicImage::ImageRgba8(buffer)).unwrap();
        assert_eq!(image.channel_layout(), ChannelLayout::Rgba8);
        assert_eq!(image.pixel(0, 0).unwrap(), PixelSample::new(1, 2, 3));
    }

    #[test]
    fn narrow_16_bit_values() {
        let buffer: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([65535, 32896, 255]));
        let image = Image::try_from(DynamicImage::ImageRgb16(buffer)).unwrap();
        assert_eq!(image.channel_layout(), ChannelLayout::Rgb16);
        assert_eq!(image.pixel(0, 0).unwrap(), PixelSample::new(255, 128, 0));
    }

    #[test]
    fn narrow_16_bit_values_with_alpha() {
        let buffer: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(2, 1, Rgba([256, 511, 4096, 65535]));
        let image = Image::try_from(DynamicImage::ImageRgba16(buffer)).unwrap();
        assert_eq!(image.channel_layout(), ChannelLayout::Rgba16);
        assert_eq!(image.pixel(1, 0).unwrap(), PixelSample::new(1, 1, 16));
    }

    #[test]
    fn reject_grayscale() {
        let buffer = GrayImage::from_pixel(2, 2, Luma([9]));
        let result = Image::try_from(DynamicImage::ImageLuma8(buffer));
        match result {
            Err(Error::UnsupportedColorLayout(color_type)) => {
                assert_eq!(color_type, ColorType::L8)
            }
            _ => panic!("Grayscale image was accepted"),
        }
    }

    #[test]
    fn reject_empty_image() {
        let result = Image::try_from(DynamicImage::ImageRgb8(RgbImage::new(0, 4)));
        assert!(matches!(result, Err(Error::ImageHasNoPixels(0, 4))));
    }

    #[test]
    fn fail_outside_of_bounds() {
        let image = Image::try_from(DynamicImage::ImageRgb8(RgbImage::new(2, 3))).unwrap();
        let error = image.pixel(2, 0).unwrap_err();
        assert!(matches!(error, Error::PixelOutOfBounds(2, 0)));
        assert_eq!(error.kind(), ErrorKind::PixelAccess);
        assert!(image.pixel(0, 3).is_err());
    }

    #[test]
    fn coordinates_cover_image() {
        let image = Image::try_from(DynamicImage::ImageRgb8(RgbImage::new(5, 4))).unwrap();
        assert_eq!(image.coordinates().len(), 20);
    }

    #[test]
    fn display_pixel_sample() {
        assert_eq!(
            PixelSample::new(255, 128, 0).to_string(),
            "R: 255, G: 128, B: 0"
        );
    }
}

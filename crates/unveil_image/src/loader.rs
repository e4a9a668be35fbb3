//! Image decoding

use unveil_core::geometry::SurfaceSize;
use unveil_core::surface::Bitmap;

use crate::error::{ImageError, Result};
use crate::source::ImageSource;

/// A decoded RGBA8 bitmap
#[derive(Debug, Clone)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Resolve a source into decoded pixels.
    pub fn load(source: ImageSource) -> Result<Self> {
        match source {
            ImageSource::File(path) => {
                let bytes = std::fs::read(&path).map_err(|source| ImageError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), len = bytes.len(), "decoding image file");
                Self::decode(&bytes)
            }
            ImageSource::Bytes(bytes) => Self::decode(&bytes),
            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba(data, width, height),
        }
    }

    /// Wrap pre-decoded RGBA pixels after validating their length.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ImageError::InvalidRgbaData {
                len: data.len(),
                width,
                height,
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            pixels: data,
        })
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width as f32, self.height as f32)
    }
}

impl Bitmap for ImageData {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_roundtrip_keeps_dimensions() {
        let data = ImageData::from_rgba(vec![0u8; 8 * 4 * 4], 8, 4).unwrap();
        assert_eq!(data.width(), 8);
        assert_eq!(data.height(), 4);
        assert_eq!(data.size(), SurfaceSize::new(8.0, 4.0));
    }

    #[test]
    fn mismatched_rgba_length_is_rejected() {
        let err = ImageData::from_rgba(vec![0u8; 10], 8, 4).unwrap_err();
        assert!(matches!(err, ImageError::InvalidRgbaData { .. }));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ImageData::load(ImageSource::file("/nonexistent/unveil.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io { .. }));
    }
}

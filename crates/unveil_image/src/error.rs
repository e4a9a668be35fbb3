//! Image loading errors

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ImageError>;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to read image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("RGBA data length {len} does not match {width}x{height} ({expected} bytes expected)")]
    InvalidRgbaData {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },
}

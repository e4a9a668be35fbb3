//! Unveil Image
//!
//! Image loading for the unveil reveal system.
//!
//! # Features
//!
//! - Load images from file paths, encoded bytes, or pre-decoded RGBA data
//! - Support for PNG, JPEG, GIF, BMP formats
//!
//! # Example
//!
//! ```ignore
//! use unveil_image::{ImageData, ImageSource};
//!
//! // Load from file
//! let data = ImageData::load(ImageSource::file("image.png"))?;
//!
//! // Wrap pixels already in memory
//! let data = ImageData::load(ImageSource::rgba(pixels, 64, 64))?;
//! ```

mod error;
mod loader;
mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::ImageSource;

//! Background image metadata for the region annotator.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::geometry::Size;

/// Errors that can occur when reading a background image.
#[derive(Error, Debug)]
pub enum BackgroundError {
    /// I/O error while sniffing the image format
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a decodable image
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The image has no pixels on one axis
    #[error("Image has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },
}

/// The image regions are drawn over.
///
/// Only the natural pixel size matters to the annotator; the host keeps the
/// pixels and displays them underneath the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    size: Size,
    source: Option<String>,
}

impl BackgroundImage {
    /// Describe an image the host has already loaded.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            source: None,
        }
    }

    /// Attach the URL or path the image was loaded from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Read the natural size from encoded image bytes (PNG, JPEG, GIF, WebP).
    ///
    /// Only the header is parsed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BackgroundError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        if width == 0 || height == 0 {
            return Err(BackgroundError::ZeroSize { width, height });
        }
        log::debug!("Decoded background header: {}x{}", width, height);
        Ok(Self::new(width, height))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

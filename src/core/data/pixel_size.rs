use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelSizeError {}

/// Dimensions of a raster, in pixels. Both axes are at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelSizeError> {
        if width == 0 || height == 0 {
            return Err(PixelSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Divides both axes by `factor`, never going below one pixel.
    #[must_use]
    pub fn downsampled(&self, factor: u32) -> Self {
        let factor = factor.max(1);

        Self {
            width: (self.width / factor).max(1),
            height: (self.height / factor).max(1),
        }
    }
}

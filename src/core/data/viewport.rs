use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::ScreenPosition;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.7,
    imag: 0.0,
};
pub const INITIAL_COMPLEX_WIDTH: f64 = 3.5;
pub const ITERATION_FLOOR: u32 = 100;

const ITERATION_GROWTH: f64 = 150.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidComplexWidth(f64),
    IterationLimitBelowFloor { iter_limit: u32, floor: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComplexWidth(width) => {
                write!(f, "complex width must be positive and finite: {}", width)
            }
            Self::IterationLimitBelowFloor { iter_limit, floor } => {
                write!(f, "iteration limit {} is below the floor of {}", iter_limit, floor)
            }
        }
    }
}

impl Error for ViewportError {}

/// Iteration ceiling for a given view width; grows logarithmically with zoom depth.
#[must_use]
pub fn iter_limit_for_width(complex_width: f64) -> u32 {
    let raw = (ITERATION_FLOOR as f64
        + ITERATION_GROWTH * (INITIAL_COMPLEX_WIDTH / complex_width).ln())
    .floor();

    if raw.is_nan() || raw < ITERATION_FLOOR as f64 {
        ITERATION_FLOOR
    } else {
        raw as u32
    }
}

/// The window into the complex plane currently on display.
///
/// Pixels are square: the same `scale` applies to both axes. Raster rows count
/// down the imaginary axis, and the raster is presented mirrored vertically, so
/// the point drawn at screen `(x, y)` is `pixel_to_complex((x, H - y))`. The
/// zoom and pan corrections below keep that drawn point under the cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    complex_width: f64,
    iter_limit: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            complex_width: INITIAL_COMPLEX_WIDTH,
            iter_limit: ITERATION_FLOOR,
        }
    }
}

impl Viewport {
    pub fn new(center: Complex, complex_width: f64, iter_limit: u32) -> Result<Self, ViewportError> {
        if !complex_width.is_finite() || complex_width <= 0.0 {
            return Err(ViewportError::InvalidComplexWidth(complex_width));
        }

        if iter_limit < ITERATION_FLOOR {
            return Err(ViewportError::IterationLimitBelowFloor {
                iter_limit,
                floor: ITERATION_FLOOR,
            });
        }

        Ok(Self {
            center,
            complex_width,
            iter_limit,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn complex_width(&self) -> f64 {
        self.complex_width
    }

    #[must_use]
    pub fn iter_limit(&self) -> u32 {
        self.iter_limit
    }

    /// Complex units per pixel at the given raster size.
    #[must_use]
    pub fn scale(&self, size: PixelSize) -> f64 {
        self.complex_width / size.width() as f64
    }

    #[must_use]
    pub fn pixel_to_complex(&self, position: ScreenPosition, size: PixelSize) -> Complex {
        let scale = self.scale(size);

        Complex {
            real: self.center.real + (position.x - size.width() as f64 / 2.0) * scale,
            imag: self.center.imag - (position.y - size.height() as f64 / 2.0) * scale,
        }
    }

    /// Zooms by `notches` wheel steps keeping the point under `cursor` fixed.
    ///
    /// Positive notches narrow the view. Returns `None` when the resulting width
    /// would leave the representable range of `f64`.
    #[must_use]
    pub fn zoomed_about(
        &self,
        cursor: ScreenPosition,
        size: PixelSize,
        notches: f64,
        zoom_factor: f64,
    ) -> Option<Self> {
        let complex_width = self.complex_width * zoom_factor.powf(-notches);

        if !complex_width.is_finite() || complex_width <= 0.0 {
            return None;
        }

        let before = self.pixel_to_complex(cursor, size);
        let mut zoomed = Self {
            center: self.center,
            complex_width,
            iter_limit: iter_limit_for_width(complex_width),
        };
        let after = zoomed.pixel_to_complex(cursor, size);

        zoomed.center.real += before.real - after.real;
        zoomed.center.imag -= before.imag - after.imag;

        Some(zoomed)
    }

    /// Re-centres relative to `start_center` for a drag of `delta` screen pixels.
    #[must_use]
    pub fn panned_from(&self, start_center: Complex, delta: ScreenPosition, size: PixelSize) -> Self {
        let scale = self.scale(size);

        Self {
            center: Complex {
                real: start_center.real - delta.x * scale,
                imag: start_center.imag - delta.y * scale,
            },
            ..*self
        }
    }
}

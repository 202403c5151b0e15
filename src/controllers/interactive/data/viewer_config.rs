use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
use crate::core::data::viewport::Viewport;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
pub const DEFAULT_TITLE: &str = "Mandelbrot Viewer";
pub const DEFAULT_TARGET_FPS: u32 = 60;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;
pub const DEFAULT_DOWNSAMPLE_FACTOR: u32 = 2;

const MIN_DOWNSAMPLE_FACTOR: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerConfigError {
    InvalidWindowSize(PixelSizeError),
    DownsampleFactorTooSmall { factor: u32, minimum: u32 },
    ZeroTargetFps,
    InvalidZoomFactor(f64),
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowSize(err) => write!(f, "invalid window size: {}", err),
            Self::DownsampleFactorTooSmall { factor, minimum } => write!(
                f,
                "downsample factor {} is below the minimum of {}",
                factor, minimum
            ),
            Self::ZeroTargetFps => write!(f, "target frame rate must be greater than zero"),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be finite and greater than one: {}", factor)
            }
        }
    }
}

impl Error for ViewerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidWindowSize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelSizeError> for ViewerConfigError {
    fn from(err: PixelSizeError) -> Self {
        Self::InvalidWindowSize(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    pub target_fps: u32,
    /// Width ratio applied per wheel notch.
    pub zoom_factor: f64,
    /// Integer divisor from the display size to the preview size.
    pub downsample_factor: u32,
    pub initial_viewport: Viewport,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            downsample_factor: DEFAULT_DOWNSAMPLE_FACTOR,
            initial_viewport: Viewport::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ViewerConfigError> {
        self.display_size()?;

        if self.downsample_factor < MIN_DOWNSAMPLE_FACTOR {
            return Err(ViewerConfigError::DownsampleFactorTooSmall {
                factor: self.downsample_factor,
                minimum: MIN_DOWNSAMPLE_FACTOR,
            });
        }

        if self.target_fps == 0 {
            return Err(ViewerConfigError::ZeroTargetFps);
        }

        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(ViewerConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        Ok(())
    }

    pub fn display_size(&self) -> Result<PixelSize, ViewerConfigError> {
        Ok(PixelSize::new(self.window_width, self.window_height)?)
    }

    pub fn low_res_size(&self) -> Result<PixelSize, ViewerConfigError> {
        Ok(self.display_size()?.downsampled(self.downsample_factor))
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

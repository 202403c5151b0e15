use std::f64::consts::LN_2;

use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::Escape;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

const HUE_PER_ITERATION: f64 = 0.03;
const SATURATION: f32 = 0.85;
const VALUE: f32 = 0.75;

/// Continuous escape count `i + 1 - log2(log2 |z|)`.
///
/// Only meaningful for escaped points, where `|z| >= 2`.
#[must_use]
pub fn smooth_iteration_count(escape: Escape) -> f64 {
    let log_zn = escape.z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    f64::from(escape.iterations) + 1.0 - nu
}

/// Hue in degrees, `[0, 360)`, for a smooth iteration count.
#[must_use]
pub fn hue_for(smooth_count: f64) -> f32 {
    ((smooth_count * HUE_PER_ITERATION).rem_euclid(1.0) * 360.0) as f32
}

/// Rotating-hue palette over the smooth escape count; interior points are black.
#[derive(Debug, Copy, Clone)]
pub struct MandelbrotSmoothHsv {
    max_iterations: u32,
}

impl ColourMap<Escape> for MandelbrotSmoothHsv {
    fn map(&self, escape: Escape) -> Colour {
        if escape.iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        hsv_to_rgb(hue_for(smooth_iteration_count(escape)), SATURATION, VALUE)
    }
}

impl MandelbrotSmoothHsv {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

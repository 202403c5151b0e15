use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{Point, ScreenPosition};
use crate::core::data::viewport::Viewport;

const BAILOUT_SQUARED: f64 = 4.0;

/// Where the orbit of `c` ended up.
///
/// `iterations == max_iterations` means the point is treated as inside the
/// set; `z` is meaningless then.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    pub iterations: u32,
    pub z: Complex,
}

impl Escape {
    fn interior(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            z: Complex::default(),
        }
    }
}

fn in_main_cardioid(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    q * (q + x) < 0.25 * y_squared
}

fn in_period_two_bulb(c: Complex) -> bool {
    let x = c.real + 1.0;

    x * x + c.imag * c.imag < 0.0625
}

/// Escape-time iteration of `z <- z^2 + c` from `z = 0`, capped at `max_iterations`.
///
/// The returned count is the number of completed update steps, so a point
/// outside the radius-2 disc escapes after one step.
#[must_use]
pub fn iterate(c: Complex, max_iterations: u32) -> Escape {
    if in_main_cardioid(c) || in_period_two_bulb(c) {
        return Escape::interior(max_iterations);
    }

    let (mut zx, mut zy) = (0.0_f64, 0.0_f64);
    let (mut zx2, mut zy2) = (0.0_f64, 0.0_f64);
    let mut iterations = 0;

    while zx2 + zy2 < BAILOUT_SQUARED && iterations < max_iterations {
        // zy must see the previous zx.
        zy = 2.0 * zx * zy + c.imag;
        zx = zx2 - zy2 + c.real;
        zx2 = zx * zx;
        zy2 = zy * zy;
        iterations += 1;
    }

    Escape {
        iterations,
        z: Complex { real: zx, imag: zy },
    }
}

/// Escape-time Mandelbrot over one viewport at one raster size.
#[derive(Debug, Copy, Clone)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    size: PixelSize,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Escape;

    fn compute(&self, pixel: Point) -> Self::Success {
        let position = ScreenPosition {
            x: f64::from(pixel.x),
            y: f64::from(pixel.y),
        };
        let c = self.viewport.pixel_to_complex(position, self.size);

        iterate(c, self.viewport.iter_limit())
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, size: PixelSize) -> Self {
        Self { viewport, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_outside_radius_two_escapes_after_one_step() {
        for point in [c(2.5, 0.0), c(0.0, -3.0), c(-1.5, 1.5), c(10.0, 10.0)] {
            for max_iterations in [1, 100, 1000] {
                assert_eq!(iterate(point, max_iterations).iterations, 1);
            }
        }
    }

    #[test]
    fn test_cardioid_points_exit_early() {
        for point in [c(0.0, 0.0), c(-0.7, 0.0), c(0.2, 0.3), c(-0.1, -0.6)] {
            assert_eq!(iterate(point, 250), Escape::interior(250));
        }
    }

    #[test]
    fn test_period_two_bulb_points_exit_early() {
        for point in [c(-1.0, 0.0), c(-1.1, 0.1), c(-0.9, -0.15)] {
            assert_eq!(iterate(point, 100), Escape::interior(100));
        }
    }

    #[test]
    fn test_interior_outside_shortcuts_runs_to_limit() {
        // Period-3 bulb, not covered by either early exit.
        let escape = iterate(c(-0.122, 0.745), 100);

        assert_eq!(escape.iterations, 100);
    }

    #[test]
    fn test_update_order_uses_previous_real_part() {
        // c = (1, 1): z1 = (1, 1), z2 = (1, 3) with |z2|^2 = 10.
        let escape = iterate(c(1.0, 1.0), 100);

        assert_eq!(escape.iterations, 2);
        assert_eq!(escape.z, c(1.0, 3.0));
    }

    #[test]
    fn test_iteration_is_deterministic() {
        let point = c(-0.743_643_887, 0.131_825_904);
        let first = iterate(point, 500);

        for _ in 0..10 {
            let again = iterate(point, 500);
            assert_eq!(again.iterations, first.iterations);
            assert_eq!(again.z.real.to_bits(), first.z.real.to_bits());
            assert_eq!(again.z.imag.to_bits(), first.z.imag.to_bits());
        }
    }

    #[test]
    fn test_escaped_point_is_outside_bailout() {
        let escape = iterate(c(0.5, 0.5), 1000);

        assert_eq!(escape.iterations, 5);
        assert!(escape.z.magnitude_squared() >= 4.0);
    }

    #[test]
    fn test_startup_centre_pixel_is_interior() {
        let size = PixelSize::new(1280, 720).unwrap();
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), size);

        let escape = algorithm.compute(Point { x: 640, y: 360 });

        assert_eq!(escape.iterations, 100);
    }

    #[test]
    fn test_corner_pixel_escapes_quickly() {
        let size = PixelSize::new(1280, 720).unwrap();
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), size);

        let escape = algorithm.compute(Point { x: 0, y: 0 });

        assert!(escape.iterations < 5);
    }
}

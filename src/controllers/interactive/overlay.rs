use crate::core::data::viewport::Viewport;

pub const OVERLAY_TITLE: &str = "Mandelbrot Viewer";

/// Status panel text: title, centre, width and iteration limit, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    pub lines: [String; 4],
}

impl OverlayText {
    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let center = viewport.center();

        Self {
            lines: [
                OVERLAY_TITLE.to_string(),
                format!("Center: ({:.5}, {:.5})", center.real, center.imag),
                format!("Width: {}", format_scientific(viewport.complex_width(), 3)),
                format!("Iterations: {}", viewport.iter_limit()),
            ],
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.lines[0]
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.lines[1..]
    }
}

#[must_use]
pub fn format_fps(fps: u32) -> String {
    format!("{} FPS", fps)
}

/// Scientific notation with a signed, at least two digit exponent (`3.500e+00`).
#[must_use]
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);

    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    match exponent.parse::<i32>() {
        Ok(exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
        }
        Err(_) => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_overlay() {
        let overlay = OverlayText::for_viewport(&Viewport::default());

        assert_eq!(
            overlay.lines,
            [
                "Mandelbrot Viewer".to_string(),
                "Center: (-0.70000, 0.00000)".to_string(),
                "Width: 3.500e+00".to_string(),
                "Iterations: 100".to_string(),
            ]
        );
        assert_eq!(overlay.title(), "Mandelbrot Viewer");
        assert_eq!(overlay.details().len(), 3);
    }

    #[test]
    fn test_deep_zoom_overlay() {
        let viewport = Viewport::new(
            Complex {
                real: -0.743_643_887_037,
                imag: 0.131_825_904_205,
            },
            3.5e-7,
            2517,
        )
        .unwrap();

        let overlay = OverlayText::for_viewport(&viewport);

        assert_eq!(overlay.lines[1], "Center: (-0.74364, 0.13183)");
        assert_eq!(overlay.lines[2], "Width: 3.500e-07");
        assert_eq!(overlay.lines[3], "Iterations: 2517");
    }

    #[test]
    fn test_scientific_exponents() {
        assert_eq!(format_scientific(3.5, 3), "3.500e+00");
        assert_eq!(format_scientific(0.0035, 3), "3.500e-03");
        assert_eq!(format_scientific(12346.0, 3), "1.235e+04");
        assert_eq!(format_scientific(2.0e-120, 3), "2.000e-120");
        assert_eq!(format_scientific(0.0, 3), "0.000e+00");
    }

    #[test]
    fn test_scientific_non_finite_passes_through() {
        assert_eq!(format_scientific(f64::INFINITY, 3), "inf");
        assert_eq!(format_scientific(f64::NAN, 3), "NaN");
    }

    #[test]
    fn test_fps_label() {
        assert_eq!(format_fps(60), "60 FPS");
    }
}

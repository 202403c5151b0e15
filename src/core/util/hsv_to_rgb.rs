use crate::core::data::colour::Colour;

fn channel(offset: f32, hue: f32, saturation: f32, value: f32) -> u8 {
    let k = (offset + hue / 60.0) % 6.0;
    let k = k.min(4.0 - k).clamp(0.0, 1.0);

    ((value - value * saturation * k) * 255.0) as u8
}

/// Converts HSV (hue in degrees, saturation and value in `[0, 1]`) to RGB.
///
/// Channels are truncated rather than rounded.
#[must_use]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Colour {
    Colour {
        r: channel(5.0, hue, saturation, value),
        g: channel(3.0, hue, saturation, value),
        b: channel(1.0, hue, saturation, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Colour { r: 255, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 255 });
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let colour = hsv_to_rgb(200.0, 0.0, 0.5);

        assert_eq!(colour, Colour { r: 127, g: 127, b: 127 });
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(42.0, 0.85, 0.0), Colour::BLACK);
    }

    #[test]
    fn test_viewer_palette_brightness() {
        // max channel is value, min channel is value * (1 - saturation)
        let colour = hsv_to_rgb(0.0, 0.85, 0.75);

        assert_eq!(colour.r, 191);
        assert_eq!(colour.g, 28);
        assert_eq!(colour.b, 28);
    }
}

use std::ops::Sub;

/// Integer pixel coordinate inside a buffer, row 0 at the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Sub-pixel position on screen, as reported by the mouse.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Sub for ScreenPosition {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_position_sub() {
        let a = ScreenPosition { x: 740.0, y: 410.0 };
        let b = ScreenPosition { x: 640.0, y: 360.0 };

        assert_eq!(a - b, ScreenPosition { x: 100.0, y: 50.0 });
    }

    #[test]
    fn test_is_zero() {
        assert!(ScreenPosition::default().is_zero());
        assert!(!ScreenPosition { x: 0.0, y: -1.0 }.is_zero());
    }
}

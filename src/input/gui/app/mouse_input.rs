use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::interactive::data::frame_input::FrameInput;
use crate::core::data::point::ScreenPosition;

/// Pixel-based scroll deltas per wheel notch.
pub const PIXELS_PER_NOTCH: f64 = 120.0;

/// Accumulates window events between frames into one [`FrameInput`].
///
/// Button and key edges stay pending until the next snapshot so a press and
/// release inside a single frame are both seen.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MouseInputState {
    position: ScreenPosition,
    wheel_notches: f64,
    left_down: bool,
    left_pressed_pending: bool,
    left_released_pending: bool,
    reset_pending: bool,
}

impl MouseInputState {
    pub fn handle_cursor_moved(&mut self, position: ScreenPosition) {
        self.position = position;
    }

    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        self.wheel_notches += match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_NOTCH,
        };
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed if !self.left_down => {
                self.left_down = true;
                self.left_pressed_pending = true;
            }
            ElementState::Released if self.left_down => {
                self.left_down = false;
                self.left_released_pending = true;
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        if key_code == KeyCode::KeyR && state == ElementState::Pressed && !repeat {
            self.reset_pending = true;
        }
    }

    /// Ends a drag whose release the window may never see.
    pub fn focus_lost(&mut self) {
        self.handle_mouse_button(MouseButton::Left, ElementState::Released);
    }

    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            mouse: self.position,
            wheel: self.wheel_notches,
            left_pressed: self.left_pressed_pending,
            left_down: self.left_down,
            left_released: self.left_released_pending,
            reset_view: self.reset_pending,
        };

        self.wheel_notches = 0.0;
        self.left_pressed_pending = false;
        self.left_released_pending = false;
        self.reset_pending = false;

        input
    }
}

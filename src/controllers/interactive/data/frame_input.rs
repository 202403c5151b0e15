use crate::core::data::point::ScreenPosition;

/// Everything the controller reads from the input devices for one frame.
///
/// `wheel` is in notches, positive away from the user. The `left_*` flags are
/// the edge and level states of the left mouse button.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FrameInput {
    pub mouse: ScreenPosition,
    pub wheel: f64,
    pub left_pressed: bool,
    pub left_down: bool,
    pub left_released: bool,
    pub reset_view: bool,
}

impl FrameInput {
    #[must_use]
    pub fn idle_at(mouse: ScreenPosition) -> Self {
        Self {
            mouse,
            ..Self::default()
        }
    }
}

use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPosition;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub is_panning: bool,
    pub pan_start_mouse: ScreenPosition,
    /// Captured once when the drag begins; every drag frame offsets from it.
    pub pan_start_center: Complex,
    pub low_res_active: bool,
}

use egui::Context as EguiContext;

use crate::controllers::interactive::data::resolution::Resolution;
use crate::controllers::interactive::ports::texture_sink::TextureSink;
use crate::input::gui::errors::GuiError;

/// Window-side half of the presenter: receives committed buffers through
/// [`TextureSink`] and draws the active one plus the overlay each frame.
pub trait GuiPresenterPort: TextureSink {
    fn render(
        &mut self,
        active: Resolution,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError>;

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}

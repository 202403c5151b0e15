mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::interactive::render::{RenderTarget, render_viewport};
pub use crate::controllers::interactive::{
    FrameInput, InteractiveController, OverlayText, RenderOutcome, Resolution, TextureSink,
    ViewerConfig, ViewerConfigError,
};
pub use crate::core::actions::generation::RenderGeneration;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::point::ScreenPosition;
pub use crate::core::data::viewport::Viewport;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

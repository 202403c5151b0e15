//! Interactive controller for real-time Mandelbrot exploration.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: a [`FrameInput`] per frame, produced by the GUI adapter
//! - **Output**: the [`TextureSink`] port, which receives committed buffers
//! - **Core**: uses the rasterizer and generation counter from `core/`

mod controller;
pub mod data;
pub mod overlay;
pub mod ports;
pub mod render;

pub use controller::InteractiveController;
pub use data::frame_input::FrameInput;
pub use data::resolution::Resolution;
pub use data::viewer_config::{ViewerConfig, ViewerConfigError};
pub use overlay::OverlayText;
pub use ports::texture_sink::TextureSink;
pub use render::RenderOutcome;

pub mod frame_input;
pub mod interaction_state;
pub mod resolution;
pub mod viewer_config;

pub mod fps_counter;
pub mod frame_pacer;
pub mod gui_app;
pub mod mouse_input;
pub mod ports;

pub mod calculate_row_bands;
pub mod calculate_threads_for_row_banding;
pub mod hsv_to_rgb;

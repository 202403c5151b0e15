pub mod ports;
pub mod rasterize_bands;

pub mod cancellation;
pub mod generation;
pub mod rasterize;

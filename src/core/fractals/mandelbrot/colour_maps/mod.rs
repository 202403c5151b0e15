pub mod smooth_hsv;

//! Input adapters for the Mandelbrot viewer.
//!
//! This module contains adapters that receive input from the window and
//! translate it into per-frame controller input.

pub mod gui;

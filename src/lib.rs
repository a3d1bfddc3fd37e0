//! Render the Mandelbrot set to a PNG.
//!
//! Each pixel of a [`screen::Size`] grid is mapped onto a [`plane::Window`] of the
//! complex plane, iterated with [`escape::escape_time`], coloured by a
//! [`colour::Colouring`] and written into a [`raster::Raster`], which
//! [`output::write_png`] encodes.

pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod output;
pub mod pixel;
pub mod plane;
pub mod raster;
pub mod render;
pub mod screen;
pub mod stats;

pub use config::Config;
pub use error::{Error, Result};

//! Mapping from the pixel grid onto a rectangle of the complex plane.

use crate::{pixel::Complex, screen::Size};

/// The rectangular region of the complex plane covered by the raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub min_real: f64,
    pub max_real: f64,
    pub min_imaginary: f64,
    pub max_imaginary: f64,
}

impl Window {
    pub fn new(min_real: f64, max_real: f64, min_imaginary: f64, max_imaginary: f64) -> Self {
        Self {
            min_real,
            max_real,
            min_imaginary,
            max_imaginary,
        }
    }

    /// A window whose imaginary span follows the real span scaled by the grid's aspect
    /// ratio, so pixels come out square.
    pub fn from_real_span(min_real: f64, max_real: f64, min_imaginary: f64, size: Size) -> Self {
        let aspect = size.height as f64 / size.width as f64;
        Self::new(
            min_real,
            max_real,
            min_imaginary,
            min_imaginary + (max_real - min_real) * aspect,
        )
    }

    pub fn contains(&self, point: Complex) -> bool {
        (self.min_real..=self.max_real).contains(&point.real)
            && (self.min_imaginary..=self.max_imaginary).contains(&point.imaginary)
    }
}

/// Affine pixel-to-plane transform with the per-pixel steps computed once.
#[derive(Clone, Copy, Debug)]
pub struct Mapper {
    window: Window,
    real_step: f64,
    imaginary_step: f64,
}

impl Mapper {
    pub fn new(window: &Window, size: Size) -> Self {
        Self {
            window: *window,
            real_step: step(window.min_real, window.max_real, size.width),
            imaginary_step: step(window.min_imaginary, window.max_imaginary, size.height),
        }
    }

    /// Real coordinate of pixel column `x`.
    pub fn real(&self, x: u32) -> f64 {
        (self.window.min_real + x as f64 * self.real_step).min(self.window.max_real)
    }

    /// Imaginary coordinate of pixel row `y`. Row 0 is `min_imaginary`.
    pub fn imaginary(&self, y: u32) -> f64 {
        (self.window.min_imaginary + y as f64 * self.imaginary_step).min(self.window.max_imaginary)
    }

    pub fn point(&self, x: u32, y: u32) -> Complex {
        let point = Complex::new(self.real(x), self.imaginary(y));
        debug_assert!(self.window.contains(point), "{:?} outside {:?}", point, self.window);
        point
    }
}

// A single-pixel axis has nowhere to step to; it sits on the min bound.
fn step(min: f64, max: f64, dimension: u32) -> f64 {
    if dimension > 1 {
        (max - min) / (dimension - 1) as f64
    } else {
        0.0
    }
}

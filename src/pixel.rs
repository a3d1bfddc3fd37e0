use bytemuck::{Pod, Zeroable};

/// A point on the complex plane.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

/// One 8-bit-per-channel RGBA pixel, laid out so a `[Rgba]` casts straight to PNG bytes.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Rgba::opaque(0, 0, 0);
    pub const WHITE: Self = Rgba::opaque(255, 255, 255);
    pub const RED: Self = Rgba::opaque(255, 0, 0);
    pub const TRANSPARENT: Self = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

use bytemuck::{Pod, Zeroable};

/// Pixel dimensions of the raster grid.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {:?}",
            x,
            y,
            self
        );
        y as usize * self.width as usize + x as usize
    }
}

/*!
The in-memory raster the renderer writes into.

Pixels are stored row-major as [`Rgba`] values. `Rgba` is
[`bytemuck::Pod`](https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html), so the whole
buffer can be handed to the PNG encoder as a byte slice without copying.
*/

use crate::{pixel::Rgba, screen};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    size: screen::Size,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// A transparent raster; the renderer overwrites every pixel.
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            pixels: vec![Rgba::TRANSPARENT; size.area()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Chunk length that splits the pixels into rows. Never zero: a zero-width raster has
    /// no pixels, so any non-zero length yields no rows.
    pub fn row_len(&self) -> usize {
        (self.size.width as usize).max(1)
    }

    /// Disjoint mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Rgba> {
        let row_len = self.row_len();
        self.pixels.chunks_mut(row_len)
    }

    /// Mutable access to the backing pixels, for splitting rows across threads.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
impl Raster {
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.size.index(x, y)]
    }
}

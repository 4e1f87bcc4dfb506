use crate::domain::Rgba;
use crate::grid::cell_count;

use super::surface::Surface;

/// Owned RGBA framebuffer, one packed ABGR u32 per cell.
///
/// Laid out row-major like the grid so JS can wrap the memory directly in a
/// `Uint8ClampedArray` and hand it to `putImageData`.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// # Panics
    /// If the pixel count overflows `usize`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let Some(len) = cell_count(width, height) else {
            panic!("pixel buffer of {}x{} does not fit in memory", width, height);
        };
        Self {
            width,
            height,
            pixels: vec![background.to_abgr_u32(); len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(x as usize + y as usize * self.width as usize).copied()
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }
}

impl Surface for PixelBuffer {
    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color.to_abgr_u32());
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = x as usize + y as usize * self.width as usize;
        if let Some(pixel) = self.pixels.get_mut(idx) {
            *pixel = color.to_abgr_u32();
        }
    }
}

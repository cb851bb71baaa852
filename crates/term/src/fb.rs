//! 1-bit framebuffer.

use crate::types::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// 2-color pixel buffer, packed 8 pixels per byte.
///
/// Rows are stored top to bottom, each padded to a whole byte, with the
/// leftmost pixel in the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoFrameBuffer {
    width: u16,
    height: u16,
    bytes: Vec<u8>,
}

impl MonoFrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; Self::stride_for(width) * height as usize],
        }
    }

    fn stride_for(width: u16) -> usize {
        (width as usize).div_ceil(8)
    }

    fn stride(&self) -> usize {
        Self::stride_for(self.width)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, turning every pixel off.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.bytes.clear();
        self.bytes.resize(Self::stride_for(width) * height as usize, 0);
    }

    /// Packed rows, see the type docs for the layout.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let idx = y as usize * self.stride() + x as usize / 8;
        let mask = 0x80 >> (x as usize % 8);
        Some((idx, mask))
    }

    /// Pixel state, None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y).map(|(idx, mask)| self.bytes[idx] & mask != 0)
    }

    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Set one pixel. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some((idx, mask)) = self.locate(x, y) {
            if on {
                self.bytes[idx] |= mask;
            } else {
                self.bytes[idx] &= !mask;
            }
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Turn on a `w` x `h` rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.set(x + dx, y + dy, true);
            }
        }
    }

    /// Overwrite this buffer with `src`, resizing first if the sizes differ.
    ///
    /// Reuses the existing allocation when it is large enough.
    pub fn copy_from(&mut self, src: &MonoFrameBuffer) {
        if self.width != src.width || self.height != src.height {
            self.resize(src.width, src.height);
        }
        self.bytes.copy_from_slice(&src.bytes);
    }

    /// Number of pixels turned on.
    pub fn count_on(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl Default for MonoFrameBuffer {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

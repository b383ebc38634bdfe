//! Pixel canvas
//!
//! Owned 1-bit drawing area for one frame.

use alloc::vec;
use alloc::vec::Vec;

use crate::target::{RasterError, Surface};

/// Monochrome canvas
///
/// Pixels are stored row-major in a flat buffer indexed `y * width + x`.
/// The size is fixed at creation; every row is exactly `width` long and there
/// are exactly `height` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Canvas {
    /// Create a new canvas with every pixel off
    pub fn new(width: u16, height: u16) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![false; usize::from(width) * usize::from(height)],
        })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Set a pixel on or off; writes outside the canvas are ignored
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = on;
        }
    }

    /// Get a pixel; reads outside the canvas return `false`
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |idx| self.pixels[idx])
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Iterate over lit pixel coordinates in row-major order
    pub fn lit_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = usize::from(self.width);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(idx, _)| ((idx % width) as i32, (idx / width) as i32))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.set(x, y, on);
    }

    fn pixel(&self, x: i32, y: i32) -> bool {
        self.get(x, y)
    }
}

//! Drawing surface trait
//!
//! Defines the interface every rasterizer in this crate draws through.

use core::fmt;

/// Raster errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// Width or height is zero, or a surface does not fit the declared size
    InvalidDimension {
        /// Offending width
        width: u16,
        /// Offending height
        height: u16,
    },
    /// Output buffer too small for the encoded image
    BufferTooSmall {
        /// Bytes needed
        needed: usize,
        /// Bytes available
        available: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidDimension { width, height } => {
                write!(f, "invalid raster dimensions {}x{}", width, height)
            }
            RasterError::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {} bytes, have {}", needed, available)
            }
        }
    }
}

/// 1-bit drawing surface
///
/// Coordinates are signed so callers can hand over geometry that runs off
/// the edge. Implementations clip: writes outside `[0, width) x [0, height)`
/// are dropped and reads there return `false` (background).
pub trait Surface {
    /// Surface size in pixels as `(width, height)`
    fn size(&self) -> (u16, u16);

    /// Set or clear one pixel
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);

    /// Read one pixel
    fn pixel(&self, x: i32, y: i32) -> bool;

    /// Check whether a coordinate lies on the surface
    fn contains(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.size();
        x >= 0 && y >= 0 && x < i32::from(width) && y < i32::from(height)
    }
}

//! 1-bit BMP encoding
//!
//! File layout:
//! - FILE HEADER (14 bytes): "BM", file size, 2 reserved words, pixel offset
//! - INFO HEADER (40 bytes): BITMAPINFOHEADER, 1 bpp, no compression
//! - COLOR TABLE (8 bytes): index 0 background, index 1 foreground (B, G, R, 0)
//! - PIXEL DATA: rows bottom-to-top, MSB-first, each row zero-padded to 4 bytes
//!
//! Every multi-byte field is little-endian and written at an explicit offset.

use alloc::vec;
use alloc::vec::Vec;

use crate::target::{RasterError, Surface};

/// BMP signature
pub const SIGNATURE: [u8; 2] = *b"BM";

/// BITMAPFILEHEADER size in bytes
pub const FILE_HEADER_SIZE: usize = 14;

/// BITMAPINFOHEADER size in bytes
pub const INFO_HEADER_SIZE: usize = 40;

/// Two palette entries of four bytes each
pub const COLOR_TABLE_SIZE: usize = 2 * 4;

/// Offset of the first pixel byte
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE + COLOR_TABLE_SIZE;

/// Resolution written to both axes (72 DPI)
const PIXELS_PER_METRE: i32 = 2835;

/// 24-bit colour for a palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Two-entry monochrome palette
///
/// Off pixels are written as bit 0 and map to `background`; lit pixels are
/// bit 1 and map to `foreground`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    /// Colour table index 0
    pub background: Rgb,
    /// Colour table index 1
    pub foreground: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
        }
    }
}

/// Bytes per pixel row for a given width, padded to a 4-byte boundary
pub const fn row_stride(width: u16) -> usize {
    (width as usize + 31) / 32 * 4
}

/// Monochrome BMP encoder for a fixed declared output size
///
/// The declared size may be larger than the surface being encoded; columns
/// and rows past the surface edge are background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonoBmp {
    width: u16,
    height: u16,
    palette: Palette,
}

impl MonoBmp {
    /// Create an encoder for a `width x height` output image
    pub fn new(width: u16, height: u16) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            palette: Palette::default(),
        })
    }

    /// Use a different palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Declared output width
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Declared output height
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Palette written to the colour table
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Size of the pixel data section in bytes
    pub const fn image_size(&self) -> usize {
        row_stride(self.width) * self.height as usize
    }

    /// Total encoded file size in bytes
    pub const fn encoded_len(&self) -> usize {
        PIXEL_DATA_OFFSET + self.image_size()
    }

    /// Encode a surface into a new buffer
    pub fn encode<S>(&self, surface: &S) -> Result<Vec<u8>, RasterError>
    where
        S: Surface + ?Sized,
    {
        let mut buffer = vec![0u8; self.encoded_len()];
        let len = self.encode_into(surface, &mut buffer)?;
        debug_assert_eq!(len, buffer.len());
        Ok(buffer)
    }

    /// Encode a surface into a caller-provided buffer
    ///
    /// Returns the number of bytes written. Nothing is written unless the
    /// surface fits the declared size and the buffer is large enough.
    pub fn encode_into<S>(&self, surface: &S, buffer: &mut [u8]) -> Result<usize, RasterError>
    where
        S: Surface + ?Sized,
    {
        let (surface_width, surface_height) = surface.size();
        if surface_width > self.width || surface_height > self.height {
            return Err(RasterError::InvalidDimension {
                width: surface_width,
                height: surface_height,
            });
        }

        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(RasterError::BufferTooSmall {
                needed: total,
                available: buffer.len(),
            });
        }

        let out = &mut buffer[..total];
        self.write_headers(out);
        self.write_pixels(surface, &mut out[PIXEL_DATA_OFFSET..]);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "encoded {}x{} surface as {}x{} bmp ({} bytes)",
            surface_width,
            surface_height,
            self.width,
            self.height,
            total
        );

        Ok(total)
    }

    fn write_headers(&self, out: &mut [u8]) {
        let image_size = self.image_size() as u32;
        let file_size = self.encoded_len() as u32;

        // File header
        out[0..2].copy_from_slice(&SIGNATURE);
        put_u32(out, 2, file_size);
        put_u16(out, 6, 0);
        put_u16(out, 8, 0);
        put_u32(out, 10, PIXEL_DATA_OFFSET as u32);

        // Info header; positive height means bottom-up rows
        let info = FILE_HEADER_SIZE;
        put_u32(out, info, INFO_HEADER_SIZE as u32);
        put_i32(out, info + 4, i32::from(self.width));
        put_i32(out, info + 8, i32::from(self.height));
        put_u16(out, info + 12, 1); // planes
        put_u16(out, info + 14, 1); // bits per pixel
        put_u32(out, info + 16, 0); // BI_RGB
        put_u32(out, info + 20, image_size);
        put_i32(out, info + 24, PIXELS_PER_METRE);
        put_i32(out, info + 28, PIXELS_PER_METRE);
        put_u32(out, info + 32, 2); // colours used
        put_u32(out, info + 36, 2); // important colours

        let table = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
        put_rgb(out, table, self.palette.background);
        put_rgb(out, table + 4, self.palette.foreground);
    }

    fn write_pixels<S>(&self, surface: &S, pixels: &mut [u8])
    where
        S: Surface + ?Sized,
    {
        let stride = row_stride(self.width);
        let (surface_width, _) = surface.size();

        for (row, line) in pixels.chunks_exact_mut(stride).enumerate() {
            line.fill(0);
            // First stored row is the bottom of the image
            let y = i32::from(self.height) - 1 - row as i32;
            for x in 0..usize::from(surface_width) {
                if surface.pixel(x as i32, y) {
                    line[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
    }
}

/// Encode a surface at a declared output size with the default palette
pub fn encode<S>(surface: &S, width: u16, height: u16) -> Result<Vec<u8>, RasterError>
where
    S: Surface + ?Sized,
{
    MonoBmp::new(width, height)?.encode(surface)
}

fn put_u16(out: &mut [u8], offset: usize, value: u16) {
    out[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut [u8], offset: usize, value: u32) {
    out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_i32(out: &mut [u8], offset: usize, value: i32) {
    out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_rgb(out: &mut [u8], offset: usize, color: Rgb) {
    out[offset..offset + 4].copy_from_slice(&[color.b, color.g, color.r, 0]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::primitives::draw_line;
    use crate::text::draw_text;
    use proptest::prelude::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_row_stride() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(32), 4);
        assert_eq!(row_stride(33), 8);
        assert_eq!(row_stride(524), 68);
        assert_eq!(row_stride(526), 68);
    }

    #[test]
    fn test_single_lit_pixel() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set(0, 0, true);
        let bytes = encode(&canvas, 1, 1).unwrap();

        assert_eq!(bytes.len(), 66);
        assert_eq!(&bytes[PIXEL_DATA_OFFSET..], &[0x80, 0x00, 0x00, 0x00]);

        // Index 0 white background, index 1 black foreground
        assert_eq!(&bytes[54..58], &[0xFF, 0xFF, 0xFF, 0x00]);
        assert_eq!(&bytes[58..62], &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_header_fields() {
        let canvas = Canvas::new(524, 100).unwrap();
        let bytes = encode(&canvas, 526, 100).unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32_at(&bytes, 2) as usize, bytes.len());
        assert_eq!(u32_at(&bytes, 6), 0);
        assert_eq!(u32_at(&bytes, 10), 62);

        assert_eq!(u32_at(&bytes, 14), 40);
        assert_eq!(u32_at(&bytes, 18), 526);
        assert_eq!(u32_at(&bytes, 22), 100);
        assert_eq!(u16_at(&bytes, 26), 1);
        assert_eq!(u16_at(&bytes, 28), 1);
        assert_eq!(u32_at(&bytes, 30), 0);
        assert_eq!(u32_at(&bytes, 34), 68 * 100);
        assert_eq!(u32_at(&bytes, 46), 2);
        assert_eq!(bytes.len(), 62 + 68 * 100);
    }

    #[test]
    fn test_rows_are_bottom_up() {
        let mut canvas = Canvas::new(8, 2).unwrap();
        canvas.set(0, 0, true); // top row
        canvas.set(7, 1, true); // bottom row
        let bytes = encode(&canvas, 8, 2).unwrap();

        let data = &bytes[PIXEL_DATA_OFFSET..];
        assert_eq!(&data[0..4], &[0x01, 0, 0, 0]);
        assert_eq!(&data[4..8], &[0x80, 0, 0, 0]);
    }

    #[test]
    fn test_wider_target_pads_with_background() {
        let mut canvas = Canvas::new(8, 1).unwrap();
        for x in 0..8 {
            canvas.set(x, 0, true);
        }
        let bytes = encode(&canvas, 10, 2).unwrap();

        let data = &bytes[PIXEL_DATA_OFFSET..];
        // Extra row past the canvas is stored first and stays blank
        assert_eq!(&data[0..4], &[0, 0, 0, 0]);
        assert_eq!(&data[4..8], &[0xFF, 0x00, 0, 0]);
    }

    #[test]
    fn test_custom_palette() {
        let canvas = Canvas::new(2, 2).unwrap();
        let palette = Palette {
            background: Rgb::new(0x10, 0x20, 0x30),
            foreground: Rgb::new(0xA0, 0xB0, 0xC0),
        };
        let bytes = MonoBmp::new(2, 2)
            .unwrap()
            .with_palette(palette)
            .encode(&canvas)
            .unwrap();

        assert_eq!(&bytes[54..62], &[0x30, 0x20, 0x10, 0, 0xC0, 0xB0, 0xA0, 0]);
    }

    #[test]
    fn test_invalid_declared_size() {
        assert_eq!(
            MonoBmp::new(0, 100),
            Err(RasterError::InvalidDimension { width: 0, height: 100 })
        );

        let canvas = Canvas::new(20, 20).unwrap();
        assert_eq!(
            encode(&canvas, 10, 20),
            Err(RasterError::InvalidDimension { width: 20, height: 20 })
        );
    }

    #[test]
    fn test_encode_into_buffer_too_small() {
        let canvas = Canvas::new(4, 4).unwrap();
        let encoder = MonoBmp::new(4, 4).unwrap();
        let mut buffer = [0xEEu8; 40];

        assert_eq!(
            encoder.encode_into(&canvas, &mut buffer),
            Err(RasterError::BufferTooSmall { needed: 78, available: 40 })
        );
        // All-or-nothing: nothing was touched
        assert!(buffer.iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn test_encode_into_clears_stale_bytes() {
        let canvas = Canvas::new(4, 4).unwrap();
        let encoder = MonoBmp::new(4, 4).unwrap();
        let mut buffer = [0xFFu8; 100];

        let len = encoder.encode_into(&canvas, &mut buffer).unwrap();
        assert_eq!(len, encoder.encoded_len());
        assert_eq!(buffer[..len], encoder.encode(&canvas).unwrap()[..]);
        assert_eq!(buffer[len], 0xFF);
    }

    #[test]
    fn test_win_text_is_order_independent() {
        let mut first = Canvas::new(100, 20).unwrap();
        draw_text(&mut first, "WIN", 2, 2, 2, 1);
        draw_line(&mut first, 60, 0, 99, 19, true);

        let mut second = Canvas::new(100, 20).unwrap();
        draw_line(&mut second, 99, 19, 60, 0, true);
        draw_text(&mut second, "WIN", 2, 2, 2, 1);

        let a = encode(&first, 100, 20).unwrap();
        let b = encode(&first, 100, 20).unwrap();
        let c = encode(&second, 100, 20).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    proptest! {
        #[test]
        fn prop_encoded_length(w in 1u16..300, h in 1u16..64) {
            let canvas = Canvas::new(w, h).unwrap();
            let bytes = encode(&canvas, w, h).unwrap();
            let stride = (usize::from(w) + 7) / 8;
            let padded = (stride + 3) / 4 * 4;
            prop_assert_eq!(bytes.len(), 62 + padded * usize::from(h));
        }

        #[test]
        fn prop_pixels_map_to_bits(w in 1u16..40, h in 1u16..20, seed in any::<u64>()) {
            let mut canvas = Canvas::new(w, h).unwrap();
            let mut state = seed;
            for y in 0..i32::from(h) {
                for x in 0..i32::from(w) {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    canvas.set(x, y, state >> 63 == 1);
                }
            }

            let bytes = encode(&canvas, w, h).unwrap();
            let stride = row_stride(w);
            for y in 0..i32::from(h) {
                let row = (i32::from(h) - 1 - y) as usize;
                for x in 0..i32::from(w) {
                    let byte = bytes[PIXEL_DATA_OFFSET + row * stride + x as usize / 8];
                    let bit = byte & (0x80 >> (x as usize % 8)) != 0;
                    prop_assert_eq!(bit, canvas.get(x, y));
                }
            }
        }
    }
}

//! Monochrome raster pipeline for the Gallows display
//!
//! This crate provides:
//! - `Canvas`, an owned 1-bit pixel grid with clip-to-bounds access
//! - `Surface` trait that every rasterizer draws through
//! - Line, circle and rectangle primitives
//! - A fixed 5x7 bitmap font with scaled glyph stamping and text layout
//! - `MonoBmp`, an encoder for uncompressed 1-bit-per-pixel BMP files
//!
//! # Pipeline
//!
//! ```text
//! Canvas::new ──▶ draw_line / draw_circle / draw_text ──▶ MonoBmp::encode ──▶ Vec<u8>
//! ```
//!
//! A canvas is built fresh for every frame and dropped once encoded. Nothing
//! here keeps state between frames, so independent renders never alias.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod bmp;
pub mod canvas;
pub mod font;
pub mod primitives;
pub mod target;
pub mod text;

// Re-export key types
pub use bmp::{encode, row_stride, MonoBmp, Palette, Rgb, PIXEL_DATA_OFFSET};
pub use canvas::Canvas;
pub use font::{draw_char, is_supported, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use primitives::{draw_circle, draw_line, draw_rect, fill_rect};
pub use target::{RasterError, Surface};
pub use text::{draw_text, draw_text_aligned, text_height, text_width, Align, DEFAULT_SPACING};

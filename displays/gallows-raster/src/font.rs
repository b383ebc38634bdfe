//! 5x7 bitmap font
//!
//! Each glyph is five column bytes; bit 0 is the top row and only bits 0-6
//! are read. Supported: `A-Z`, `0-9`, space and `:/_!?.,-()|`. Lookup is
//! case-insensitive and anything else renders as `?`.

use crate::primitives::fill_rect;
use crate::target::Surface;

/// Glyph width in columns (unscaled)
pub const GLYPH_WIDTH: i32 = 5;

/// Glyph height in rows (unscaled)
pub const GLYPH_HEIGHT: i32 = 7;

type Glyph = [u8; 5];

const FALLBACK: char = '?';

/// Look up the column data for a supported character
const fn lookup(c: char) -> Option<&'static Glyph> {
    let glyph: &'static Glyph = match c {
        ' ' => &[0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => &[0x7C, 0x12, 0x11, 0x12, 0x7C],
        'B' => &[0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => &[0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => &[0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => &[0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => &[0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => &[0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => &[0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => &[0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => &[0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => &[0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => &[0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => &[0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => &[0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => &[0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => &[0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => &[0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => &[0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => &[0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => &[0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => &[0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => &[0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => &[0x3F, 0x40, 0x38, 0x40, 0x3F],
        'X' => &[0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => &[0x07, 0x08, 0x70, 0x08, 0x07],
        'Z' => &[0x61, 0x51, 0x49, 0x45, 0x43],
        '0' => &[0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => &[0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => &[0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => &[0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => &[0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => &[0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => &[0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => &[0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => &[0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => &[0x06, 0x49, 0x49, 0x29, 0x1E],
        ':' => &[0x00, 0x36, 0x36, 0x00, 0x00],
        '/' => &[0x20, 0x10, 0x08, 0x04, 0x02],
        '_' => &[0x40, 0x40, 0x40, 0x40, 0x40],
        '!' => &[0x00, 0x00, 0x5F, 0x00, 0x00],
        '?' => &[0x02, 0x01, 0x51, 0x09, 0x06],
        '.' => &[0x00, 0x60, 0x60, 0x00, 0x00],
        ',' => &[0x00, 0x80, 0x60, 0x00, 0x00],
        '-' => &[0x08, 0x08, 0x08, 0x08, 0x08],
        '(' => &[0x00, 0x1C, 0x22, 0x41, 0x00],
        ')' => &[0x00, 0x41, 0x22, 0x1C, 0x00],
        '|' => &[0x00, 0x00, 0x7F, 0x00, 0x00],
        _ => return None,
    };
    Some(glyph)
}

/// Get the glyph for a character, falling back to `?`
fn glyph_for(c: char) -> &'static Glyph {
    match lookup(c.to_ascii_uppercase()) {
        Some(glyph) => glyph,
        None => lookup(FALLBACK).unwrap_or(&[0; 5]),
    }
}

/// Check whether a character has its own glyph (case-insensitive)
pub fn is_supported(c: char) -> bool {
    lookup(c.to_ascii_uppercase()).is_some()
}

/// Stamp one character with its top-left corner at `(x, y)`
///
/// Every set bit becomes a `scale x scale` block. `scale = 1` gives the
/// plain 5x7 glyph; `scale = 0` draws nothing.
pub fn draw_char<S>(surface: &mut S, c: char, x: i32, y: i32, scale: u16)
where
    S: Surface + ?Sized,
{
    if scale == 0 {
        return;
    }
    let glyph = glyph_for(c);
    let step = i64::from(scale);

    for (col, &bits) in (0i64..).zip(glyph.iter()) {
        for row in 0..i64::from(GLYPH_HEIGHT) {
            if (bits >> row) & 1 == 0 {
                continue;
            }
            let left = i64::from(x) + col * step;
            let top = i64::from(y) + row * step;
            // Blocks starting past i32 can never reach the surface
            if let (Ok(left), Ok(top)) = (i32::try_from(left), i32::try_from(top)) {
                fill_rect(surface, left, top, scale, scale, true);
            }
        }
    }
}

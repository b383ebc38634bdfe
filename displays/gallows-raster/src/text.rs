//! Text layout
//!
//! Lays glyphs out left to right on a fixed advance of
//! `6 * scale + spacing`: five glyph columns plus one blank column, scaled,
//! plus the caller's extra spacing.

use crate::font::{draw_char, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::target::Surface;

/// Extra pixels between glyph cells when the caller has no preference
pub const DEFAULT_SPACING: i32 = 1;

/// Horizontal alignment of a text box against an anchor column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Box starts at the anchor
    #[default]
    Left,
    /// Box is centred on the anchor (floor)
    Center,
    /// Box ends at the anchor
    Right,
}

fn advance(scale: u16, spacing: i32) -> i64 {
    i64::from(GLYPH_WIDTH + 1) * i64::from(scale) + i64::from(spacing)
}

/// Unclamped box width; large scales and spacings overflow `i32`
fn box_width(text: &str, scale: u16, spacing: i32) -> i64 {
    let count = text.chars().count() as i64;
    if count == 0 {
        return 0;
    }
    count * advance(scale, spacing) - i64::from(spacing)
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Lay glyphs out from a wide origin; cells outside `i32` are skipped
fn layout<S>(surface: &mut S, text: &str, x: i64, y: i32, scale: u16, spacing: i32)
where
    S: Surface + ?Sized,
{
    let step = advance(scale, spacing);
    let mut cursor = x;
    for c in text.chars() {
        if let Ok(origin) = i32::try_from(cursor) {
            draw_char(surface, c, origin, y, scale);
        }
        cursor = cursor.saturating_add(step);
    }
}

/// Draw a string with its first glyph's top-left corner at `(x, y)`
pub fn draw_text<S>(surface: &mut S, text: &str, x: i32, y: i32, scale: u16, spacing: i32)
where
    S: Surface + ?Sized,
{
    layout(surface, text, i64::from(x), y, scale, spacing);
}

/// Width in pixels of the box `draw_text` lays out for `text`
///
/// `n * (6 * scale + spacing) - spacing` for `n` characters: the last glyph
/// keeps its blank column but no trailing spacing. Empty text is 0 wide.
/// Widths beyond `i32` saturate.
pub fn text_width(text: &str, scale: u16, spacing: i32) -> i32 {
    clamp_to_i32(box_width(text, scale, spacing))
}

/// Height in pixels of one line of text
pub fn text_height(scale: u16) -> i32 {
    GLYPH_HEIGHT * i32::from(scale)
}

/// Draw a string aligned against `anchor_x`
///
/// The box position is derived from [`text_width`], so right- and
/// centre-aligned text lands exactly where the width says it will.
pub fn draw_text_aligned<S>(
    surface: &mut S,
    text: &str,
    anchor_x: i32,
    y: i32,
    scale: u16,
    spacing: i32,
    align: Align,
) where
    S: Surface + ?Sized,
{
    let width = box_width(text, scale, spacing);
    let anchor = i64::from(anchor_x);
    let x = match align {
        Align::Left => anchor,
        Align::Center => anchor - width.div_euclid(2),
        Align::Right => anchor - width,
    };
    layout(surface, text, x, y, scale, spacing);
}

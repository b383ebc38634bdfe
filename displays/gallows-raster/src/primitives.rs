//! Line, circle and rectangle rasterization
//!
//! All primitives draw through [`Surface`] and rely on its clipping, so any
//! `i32` geometry is accepted. `on = false` erases instead of drawing.

use core::ops::RangeInclusive;

use crate::target::Surface;

/// Draw a straight segment with Bresenham's algorithm
///
/// Exactly one pixel is plotted per step along the dominant axis. The
/// endpoints are ordered before stepping, so `(x0, y0) -> (x1, y1)` and
/// `(x1, y1) -> (x0, y0)` light the same pixels. Only the steps that land on
/// the surface are visited, so endpoints far off the edge cost nothing.
pub fn draw_line<S>(surface: &mut S, x0: i32, y0: i32, x1: i32, y1: i32, on: bool)
where
    S: Surface + ?Sized,
{
    let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
        ((x0, y0), (x1, y1))
    } else {
        ((x1, y1), (x0, y0))
    };

    if outside_same_side(surface, x0, y0, x1, y1) {
        return;
    }

    let (width, height) = surface.size();
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx >= dy {
        // x0 <= x1 after ordering, so x always steps forward
        let Some(steps) = visible_steps(x0, 1, dx, i64::from(width)) else {
            return;
        };
        for i in steps {
            plot(surface, x0 + i, y0 + sy * minor_offset(i, dy, dx), on);
        }
    } else {
        let Some(steps) = visible_steps(y0, sy, dy, i64::from(height)) else {
            return;
        };
        for i in steps {
            plot(surface, x0 + minor_offset(i, dx, dy), y0 + sy * i, on);
        }
    }
}

/// Minor-axis offset after `step` major steps
///
/// Closed form of the error term `err = dx - dy` stepped Bresenham-style:
/// the minor axis moves once `2 * err <= major`, which after `step` steps
/// puts it at `floor((2 * minor * step + major) / (2 * major))`. `i128` keeps
/// the products of full-range `i32` spans exact.
fn minor_offset(step: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let num = 2 * i128::from(minor) * i128::from(step) + i128::from(major);
    (num / (2 * i128::from(major))) as i64
}

/// Range of major-axis steps `0..=len` whose coordinate lies in `[0, limit)`
fn visible_steps(start: i64, dir: i64, len: i64, limit: i64) -> Option<RangeInclusive<i64>> {
    // Coordinate at step i is start + dir * i
    let (first, last) = if dir > 0 {
        ((-start).max(0), (limit - 1 - start).min(len))
    } else {
        ((start - (limit - 1)).max(0), start.min(len))
    };
    (first <= last).then_some(first..=last)
}

/// Draw a circle outline with the midpoint algorithm
///
/// One octant is walked and mirrored eight ways. Radius 0 plots the centre,
/// a negative radius draws nothing.
pub fn draw_circle<S>(surface: &mut S, cx: i32, cy: i32, radius: i32, on: bool)
where
    S: Surface + ?Sized,
{
    if radius < 0 {
        return;
    }

    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mut x = i64::from(radius);
    let mut y = 0i64;
    let mut err = 1 - x;

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            plot(surface, cx + dx, cy + dy, on);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a rectangle outline with its top-left corner at `(x, y)`
pub fn draw_rect<S>(surface: &mut S, x: i32, y: i32, width: u16, height: u16, on: bool)
where
    S: Surface + ?Sized,
{
    if width == 0 || height == 0 {
        return;
    }

    let right = x.saturating_add(i32::from(width) - 1);
    let bottom = y.saturating_add(i32::from(height) - 1);

    draw_line(surface, x, y, right, y, on);
    draw_line(surface, x, bottom, right, bottom, on);
    draw_line(surface, x, y, x, bottom, on);
    draw_line(surface, right, y, right, bottom, on);
}

/// Fill a rectangle with its top-left corner at `(x, y)`
///
/// Clipped to the surface before filling.
pub fn fill_rect<S>(surface: &mut S, x: i32, y: i32, width: u16, height: u16, on: bool)
where
    S: Surface + ?Sized,
{
    let (surface_width, surface_height) = surface.size();
    let left = i64::from(x).max(0);
    let top = i64::from(y).max(0);
    let right = (i64::from(x) + i64::from(width)).min(i64::from(surface_width));
    let bottom = (i64::from(y) + i64::from(height)).min(i64::from(surface_height));

    for row in top..bottom {
        for col in left..right {
            plot(surface, col, row, on);
        }
    }
}

/// Plot a wide coordinate, dropping anything that does not fit in `i32`
fn plot<S>(surface: &mut S, x: i64, y: i64, on: bool)
where
    S: Surface + ?Sized,
{
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        surface.set_pixel(x, y, on);
    }
}

/// Trivial reject: both endpoints beyond the same edge of the surface
fn outside_same_side<S>(surface: &S, x0: i32, y0: i32, x1: i32, y1: i32) -> bool
where
    S: Surface + ?Sized,
{
    let (width, height) = surface.size();
    let (width, height) = (i32::from(width), i32::from(height));

    (x0 < 0 && x1 < 0)
        || (y0 < 0 && y1 < 0)
        || (x0 >= width && x1 >= width)
        || (y0 >= height && y1 >= height)
}

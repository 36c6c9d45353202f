//! Line rasterisation shared by the cell and sub-cell surfaces.
//!
//! Segments are first clipped with Cohen–Sutherland, then walked with
//! integer Bresenham.  Each surface supplies its own "paint one point"
//! callback and its own clip rectangle.

use crate::render::rect::{Point, Rectangle};

const INSIDE: u8 = 0b0000;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

#[inline]
fn out_code(clip: &Rectangle, p: Point) -> u8 {
    let mut code = INSIDE;
    if p.x < clip.left() {
        code |= LEFT;
    } else if p.x > clip.right() {
        code |= RIGHT;
    }
    if p.y < clip.bottom() {
        code |= BOTTOM;
    } else if p.y > clip.top() {
        code |= TOP;
    }
    code
}

/// Point on the segment `a -> b` where the coordinate along one axis is `at`.
///
/// Endpoints may sit at `i32::MIN`/`i32::MAX`, so the products are done in
/// 128-bit; the result always lies between the endpoints.
#[inline]
fn interpolate(a0: i32, a1: i32, b0: i32, b1: i32, at: i32) -> i32 {
    let num = (i128::from(b1) - i128::from(b0)) * (i128::from(at) - i128::from(a0));
    let den = i128::from(a1) - i128::from(a0);
    let v = i128::from(b0) + num / den;
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Clip `a -> b` to `clip`; `None` when nothing of it is visible.
#[must_use]
pub fn clip_line(clip: &Rectangle, mut a: Point, mut b: Point) -> Option<(Point, Point)> {
    if clip.is_empty() {
        return None;
    }
    let mut code_a = out_code(clip, a);
    let mut code_b = out_code(clip, b);

    loop {
        if code_a | code_b == INSIDE {
            return Some((a, b));
        }
        if code_a & code_b != INSIDE {
            return None;
        }

        let out = if code_a != INSIDE { code_a } else { code_b };
        // The violated edge separates a from b, so the divisors below are non-zero.
        let p = if out & TOP != 0 {
            Point::new(interpolate(a.y, b.y, a.x, b.x, clip.top()), clip.top())
        } else if out & BOTTOM != 0 {
            Point::new(interpolate(a.y, b.y, a.x, b.x, clip.bottom()), clip.bottom())
        } else if out & RIGHT != 0 {
            Point::new(clip.right(), interpolate(a.x, b.x, a.y, b.y, clip.right()))
        } else {
            Point::new(clip.left(), interpolate(a.x, b.x, a.y, b.y, clip.left()))
        };

        if out == code_a {
            a = p;
            code_a = out_code(clip, a);
        } else {
            b = p;
            code_b = out_code(clip, b);
        }
    }
}

/// Visit every cell of the 8-connected Bresenham path from `a` to `b`, both ends included.
pub fn walk_line(a: Point, b: Point, mut plot: impl FnMut(i32, i32)) {
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let (x2, y2) = (i64::from(b.x), i64::from(b.y));
    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        // x and y stay between the endpoints, which are i32
        plot(x as i32, y as i32);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Clip, then walk.
pub fn draw_line(clip: &Rectangle, a: Point, b: Point, plot: impl FnMut(i32, i32)) {
    if let Some((a, b)) = clip_line(clip, a, b) {
        walk_line(a, b, plot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(a: Point, b: Point) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        walk_line(a, b, |x, y| out.push((x, y)));
        out
    }

    fn clip() -> Rectangle {
        Rectangle::new(0, 0, 10, 10)
    }

    #[test]
    fn inside_segment_is_untouched() {
        let (a, b) = (Point::new(1, 2), Point::new(8, 7));
        assert_eq!(clip_line(&clip(), a, b), Some((a, b)));
    }

    #[test]
    fn trivial_rejects() {
        let c = clip();
        // left, right, below, above
        assert_eq!(clip_line(&c, Point::new(-5, 0), Point::new(-1, 9)), None);
        assert_eq!(clip_line(&c, Point::new(10, 0), Point::new(20, 9)), None);
        assert_eq!(clip_line(&c, Point::new(0, -3), Point::new(9, -1)), None);
        assert_eq!(clip_line(&c, Point::new(0, 10), Point::new(9, 30)), None);
    }

    #[test]
    fn crossing_one_edge_keeps_inner_part() {
        let c = clip();
        let (a, b) = clip_line(&c, Point::new(5, 5), Point::new(15, 5)).unwrap();
        assert_eq!((a, b), (Point::new(5, 5), Point::new(9, 5)));

        let (a, b) = clip_line(&c, Point::new(-4, 0), Point::new(4, 8)).unwrap();
        assert!(c.contains(a.x, a.y) && c.contains(b.x, b.y));
        assert_eq!(a, Point::new(0, 4));
    }

    #[test]
    fn diagonal_outside_corner_is_rejected() {
        // both ends outside on different sides, segment misses the rectangle
        assert_eq!(
            clip_line(&clip(), Point::new(-5, 8), Point::new(3, 20)),
            None
        );
    }

    #[test]
    fn extreme_endpoints_clamp_to_edges() {
        let c = clip();
        let (a, b) = clip_line(&c, Point::new(2, 3), Point::new(i32::MAX, 3)).unwrap();
        assert_eq!((a, b), (Point::new(2, 3), Point::new(9, 3)));
        let (_, b) = clip_line(&c, Point::new(2, 3), Point::new(4, i32::MIN)).unwrap();
        assert_eq!(b.y, 0);
        assert!(c.contains(b.x, b.y));
    }

    #[test]
    fn walk_hits_both_ends_and_stays_connected() {
        for (a, b) in [
            (Point::new(0, 0), Point::new(7, 3)),
            (Point::new(7, 3), Point::new(0, 0)),
            (Point::new(2, 9), Point::new(4, -6)),
            (Point::new(3, 3), Point::new(3, 3)),
            (Point::new(-2, 5), Point::new(6, 5)),
        ] {
            let p = path(a, b);
            assert_eq!(p.first(), Some(&(a.x, a.y)));
            assert_eq!(p.last(), Some(&(b.x, b.y)));
            for w in p.windows(2) {
                let (dx, dy) = ((w[1].0 - w[0].0).abs(), (w[1].1 - w[0].1).abs());
                assert!(dx <= 1 && dy <= 1 && dx + dy > 0);
            }
        }
    }

    #[test]
    fn draw_line_paints_only_inside() {
        let c = Rectangle::new(2, 2, 4, 4);
        let mut cells = Vec::new();
        draw_line(&c, Point::new(-10, -10), Point::new(20, 20), |x, y| {
            cells.push((x, y));
        });
        assert_eq!(cells, vec![(2, 2), (3, 3), (4, 4), (5, 5)]);
    }
}

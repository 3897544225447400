//! Scanline triangle rasterizer
//!
//! A triangle is sorted by y and classified ([`classify`]). Flat-bottom and
//! flat-top triangles go straight to the scanline filler ([`scanline`]);
//! anything else is first cut in two at the middle vertex's row
//! ([`split`]).
//!
//! Row bounds and the split point are interpolated in f32 and truncated
//! toward zero.

mod classify;
mod scanline;
mod split;

pub use classify::{Shape, SortedTriangle};
pub use scanline::{fill_flat, FlatKind, FlatTriangle, Span, Spans};
pub use split::{split, split_point};

use serde::{Deserialize, Serialize};

use crate::display::{Color, PixelBuffer};

/// A point in buffer pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Three vertices in any order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [Vertex; 3]);

impl Triangle {
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>, c: impl Into<Vertex>) -> Self {
        Self([a.into(), b.into(), c.into()])
    }

    pub fn sorted(&self) -> SortedTriangle {
        let [a, b, c] = self.0;
        SortedTriangle::new(a, b, c)
    }

    /// Twice the signed area (shoelace). Zero for collinear vertices.
    pub fn doubled_area(&self) -> i64 {
        let [a, b, c] = self.0.map(|v| (i64::from(v.x), i64::from(v.y)));
        (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)
    }
}

/// Break a triangle into the one or two flat triangles the filler draws.
///
/// The second entry is only present for a general triangle, in which case the
/// two halves cover `[top.y, mid.y)` and `[mid.y, bottom.y)` respectively.
pub fn decompose(triangle: &Triangle) -> (FlatTriangle, Option<FlatTriangle>) {
    let sorted = triangle.sorted();
    match sorted.shape() {
        Shape::FlatBottom => (
            FlatTriangle::flat_bottom(sorted.top, sorted.mid, sorted.bottom),
            None,
        ),
        Shape::FlatTop => (
            FlatTriangle::flat_top(sorted.top, sorted.mid, sorted.bottom),
            None,
        ),
        Shape::General => {
            let (upper, lower) = split(&sorted);
            (upper, Some(lower))
        },
    }
}

/// Fill a triangle with a flat color. Returns the number of pixels written.
///
/// Parts of the triangle outside the buffer are dropped row by row; the call
/// never panics on out-of-range vertices.
pub fn fill_triangle(buffer: &mut PixelBuffer, triangle: &Triangle, color: Color) -> usize {
    let (first, second) = decompose(triangle);
    let mut written = fill_flat(buffer, &first, color);
    if let Some(second) = second {
        written += fill_flat(buffer, &second, color);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const PAINT: Color = Color::WHITE;

    fn painted(buffer: &PixelBuffer) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.get_pixel(x, y) == Some(PAINT) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn render(width: u32, height: u32, triangle: &Triangle) -> (PixelBuffer, usize) {
        let mut buffer = PixelBuffer::with_size(width, height);
        let written = fill_triangle(&mut buffer, triangle, PAINT);
        (buffer, written)
    }

    fn permutations(t: &Triangle) -> [Triangle; 6] {
        let [a, b, c] = t.0;
        [
            Triangle([a, b, c]),
            Triangle([a, c, b]),
            Triangle([b, a, c]),
            Triangle([b, c, a]),
            Triangle([c, a, b]),
            Triangle([c, b, a]),
        ]
    }

    /// Per-row fill of a general triangle interpolated directly along its
    /// edges, bypassing the flat-triangle filler. Above the middle row the
    /// bounds come from top->mid and top->split, below it from mid->bottom
    /// and split->bottom.
    fn ideal_rows(t: &Triangle) -> BTreeSet<(i32, i32)> {
        let s = t.sorted();
        let (top, mid, bottom) = (s.top, s.mid, s.bottom);
        let split_x = split_point(&s).x;
        let mut set = BTreeSet::new();
        for y in top.y..bottom.y {
            let (from_x, to_x, from_y, to_y, other_from, other_to) = if y < mid.y {
                (top.x, mid.x, top.y, mid.y, top.x, split_x)
            } else {
                (mid.x, bottom.x, mid.y, bottom.y, split_x, bottom.x)
            };
            let h = (to_y - from_y) as f32;
            let dy = (y - from_y) as f32;
            let a = ((to_x - from_x) as f32 / h * dy) as i32 + from_x;
            let b = ((other_to - other_from) as f32 / h * dy) as i32 + other_from;
            for x in a.min(b)..a.max(b) {
                set.insert((x, y));
            }
        }
        set
    }

    #[test]
    fn test_fill_is_independent_of_vertex_order() {
        let cases = [
            Triangle::new((40, 40), (20, 60), (60, 60)),
            Triangle::new((20, 60), (60, 60), (40, 80)),
            Triangle::new((80, 80), (60, 100), (100, 120)),
            Triangle::new((10, 5), (90, 33), (47, 70)),
            Triangle::new((3, 3), (3, 50), (70, 20)),
            Triangle::new((-30, 10), (150, 40), (60, 170)),
        ];
        for t in cases {
            let (reference, _) = render(160, 140, &t);
            let expected = painted(&reference);
            for p in permutations(&t) {
                let (buffer, _) = render(160, 140, &p);
                assert_eq!(painted(&buffer), expected, "order {:?}", p.0);
            }
        }
    }

    #[test]
    fn test_painted_count_tracks_area() {
        let cases = [
            Triangle::new((40, 40), (20, 60), (60, 60)),
            Triangle::new((80, 80), (60, 100), (100, 120)),
            Triangle::new((10, 5), (150, 33), (47, 130)),
            Triangle::new((5, 5), (5, 105), (105, 105)),
        ];
        for t in cases {
            let (buffer, written) = render(200, 200, &t);
            let count = painted(&buffer).len();
            assert_eq!(count, written);

            let area = t.doubled_area().abs() as f64 / 2.0;
            let s = t.sorted();
            // One pixel of slack per boundary row on each side
            let tolerance = 2.0 * f64::from(s.bottom.y - s.top.y + 1);
            assert!(
                (count as f64 - area).abs() <= tolerance,
                "{:?}: painted {} vs area {}",
                t.0,
                count,
                area
            );
        }
    }

    #[test]
    fn test_horizontal_degenerate_paints_nothing() {
        for t in [
            Triangle::new((10, 20), (50, 20), (30, 20)),
            Triangle::new((0, 0), (0, 0), (0, 0)),
            Triangle::new((-100, 5), (500, 5), (7, 5)),
        ] {
            for p in permutations(&t) {
                let (buffer, written) = render(64, 64, &p);
                assert_eq!(written, 0);
                assert!(painted(&buffer).is_empty());
            }
        }
    }

    #[test]
    fn test_split_fill_matches_ideal_single_pass() {
        for t in [
            Triangle::new((10, 5), (90, 33), (47, 70)),
            Triangle::new((80, 80), (60, 100), (100, 120)),
            Triangle::new((50, 0), (0, 77), (120, 127)),
            Triangle::new((5, 10), (100, 11), (6, 120)),
        ] {
            let (buffer, written) = render(128, 128, &t);
            let got = painted(&buffer);
            assert_eq!(got, ideal_rows(&t), "{:?}", t.0);
            // Every write hit a distinct pixel: no row was painted twice
            assert_eq!(written, got.len());
        }
    }

    #[test]
    fn test_split_halves_share_no_rows() {
        let t = Triangle::new((10, 5), (90, 33), (47, 70));
        let (upper, lower) = decompose(&t);
        let lower = lower.unwrap();
        assert_eq!(upper.rows(), 5..33);
        assert_eq!(lower.rows(), 33..70);
    }

    #[test]
    fn test_out_of_range_vertices_do_not_escape_buffer() {
        let cases = [
            Triangle::new((-50, 10), (30, 40), (-50, 60)),
            Triangle::new((370, 10), (300, 90), (370, 170)),
            Triangle::new((-50, -50), (370, 90), (160, 230)),
            Triangle::new((i32::MIN, i32::MIN), (i32::MAX, 0), (0, i32::MAX)),
            Triangle::new((i32::MAX, i32::MIN), (i32::MIN, i32::MIN), (0, i32::MAX)),
        ];
        for t in cases {
            let mut buffer = PixelBuffer::with_size(320, 180);
            let written = fill_triangle(&mut buffer, &t, PAINT);
            assert_eq!(buffer.as_bytes().len(), 320 * 180 * 4);
            assert_eq!(buffer.count_color(PAINT), written);
        }
    }

    #[test]
    fn test_clipped_fill_matches_unclipped_interior() {
        // The on-screen part of a triangle is the same whether or not the
        // rest of it hangs off the buffer.
        let t = Triangle::new((-40, 10), (90, 50), (20, 120));
        let (small, _) = render(64, 64, &t);
        let mut big = PixelBuffer::with_size(256, 256);
        let shifted = Triangle(t.0.map(|v| Vertex::new(v.x + 100, v.y)));
        fill_triangle(&mut big, &shifted, PAINT);
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(small.get_pixel(x, y), big.get_pixel(x + 100, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_doubled_area() {
        assert_eq!(Triangle::new((0, 0), (4, 0), (0, 4)).doubled_area(), 16);
        assert_eq!(Triangle::new((0, 0), (2, 2), (4, 4)).doubled_area(), 0);
    }
}

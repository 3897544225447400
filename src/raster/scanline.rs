use std::ops::Range;

use super::Vertex;
use crate::display::{Color, PixelBuffer};

/// Which side of the apex the horizontal edge sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatKind {
    /// Apex above, flat edge below
    Bottom,
    /// Flat edge above, apex below
    Top,
}

/// A triangle with one horizontal edge, ready for the scanline walk.
///
/// The two flat vertices are unordered; left and right come from min/max of
/// their x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatTriangle {
    kind: FlatKind,
    apex: Vertex,
    flat: [Vertex; 2],
}

/// One row's half-open column range `[x_start, x_end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Span {
    pub fn len(&self) -> usize {
        (i64::from(self.x_end) - i64::from(self.x_start)).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x_end <= self.x_start
    }
}

/// Saturate an i64 coordinate into i32 range
#[inline]
pub(crate) fn clamp_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl FlatTriangle {
    /// Apex `top`, flat edge `a`-`b` below it
    pub fn flat_bottom(top: Vertex, a: Vertex, b: Vertex) -> Self {
        debug_assert_eq!(a.y, b.y, "flat-bottom edge must be horizontal");
        Self {
            kind: FlatKind::Bottom,
            apex: top,
            flat: [a, b],
        }
    }

    /// Flat edge `a`-`b` on top, apex `bottom` below it
    pub fn flat_top(a: Vertex, b: Vertex, bottom: Vertex) -> Self {
        debug_assert_eq!(a.y, b.y, "flat-top edge must be horizontal");
        Self {
            kind: FlatKind::Top,
            apex: bottom,
            flat: [a, b],
        }
    }

    pub fn kind(&self) -> FlatKind {
        self.kind
    }

    pub fn apex(&self) -> Vertex {
        self.apex
    }

    pub fn flat_y(&self) -> i32 {
        self.flat[0].y
    }

    /// Rows this triangle paints. The bottom row is excluded: for a
    /// flat-bottom half that row belongs to the flat-top half below it.
    pub fn rows(&self) -> Range<i64> {
        let (min_y, max_y) = match self.kind {
            FlatKind::Bottom => (self.apex.y, self.flat_y()),
            FlatKind::Top => (self.flat_y(), self.apex.y),
        };
        i64::from(min_y)..i64::from(max_y)
    }

    /// Row spans restricted to `clip` rows (typically `0..height`)
    pub fn spans(&self, clip: Range<i64>) -> Spans {
        let rows = self.rows();
        let visible = rows.start.max(clip.start)..rows.end.min(clip.end);
        Spans {
            edges: self.edges(),
            rows: visible,
        }
    }

    /// Slopes are only ever computed here, and only for a nonzero height.
    fn edges(&self) -> Option<Edges> {
        let rows = self.rows();
        let height = rows.end - rows.start;
        if height <= 0 {
            return None;
        }
        let height = height as f32;

        let [a, b] = self.flat;
        let left = i64::from(a.x.min(b.x));
        let right = i64::from(a.x.max(b.x));
        let apex_x = i64::from(self.apex.x);

        let edges = match self.kind {
            FlatKind::Bottom => Edges {
                origin_y: rows.start,
                left_x: apex_x,
                right_x: apex_x,
                left_slope: (left - apex_x) as f32 / height,
                right_slope: (right - apex_x) as f32 / height,
            },
            FlatKind::Top => Edges {
                origin_y: rows.start,
                left_x: left,
                right_x: right,
                left_slope: (apex_x - left) as f32 / height,
                right_slope: (apex_x - right) as f32 / height,
            },
        };
        Some(edges)
    }
}

/// Left and right edge walking down from `origin_y`
#[derive(Debug, Clone, Copy)]
struct Edges {
    origin_y: i64,
    left_x: i64,
    right_x: i64,
    left_slope: f32,
    right_slope: f32,
}

impl Edges {
    #[inline]
    fn span_at(&self, y: i64) -> Span {
        let dy = (y - self.origin_y) as f32;
        let x_start = (self.left_slope * dy) as i64 + self.left_x;
        let x_end = (self.right_slope * dy) as i64 + self.right_x;
        Span {
            y: clamp_coord(y),
            x_start: clamp_coord(x_start),
            x_end: clamp_coord(x_end),
        }
    }
}

/// Iterator over the spans of a [`FlatTriangle`], top row first
#[derive(Debug, Clone)]
pub struct Spans {
    edges: Option<Edges>,
    rows: Range<i64>,
}

impl Iterator for Spans {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let edges = self.edges?;
        let y = self.rows.next()?;
        Some(edges.span_at(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.edges {
            Some(_) => self.rows.size_hint(),
            None => (0, Some(0)),
        }
    }
}

/// Scanline-fill a flat triangle into the buffer. Returns pixels written.
pub fn fill_flat(buffer: &mut PixelBuffer, triangle: &FlatTriangle, color: Color) -> usize {
    let clip = 0..i64::from(buffer.height());
    triangle
        .spans(clip)
        .map(|span| buffer.fill_span(span.y, span.x_start, span.x_end, color))
        .sum()
}

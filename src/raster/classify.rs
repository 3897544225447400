use super::Vertex;

/// How a y-sorted triangle reaches the scanline filler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `mid.y == bottom.y`: apex on top, flat edge at the bottom.
    /// Also covers the fully horizontal case where all three y match.
    FlatBottom,
    /// `top.y == mid.y`: flat edge on top, apex at the bottom
    FlatTop,
    /// `top.y < mid.y < bottom.y`: needs a split at `mid.y`
    General,
}

/// Vertices ordered by ascending y
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedTriangle {
    pub top: Vertex,
    pub mid: Vertex,
    pub bottom: Vertex,
}

impl SortedTriangle {
    /// Sort three vertices by y. Ties keep their input order; the filler
    /// resolves left/right from x, so that order never reaches the output.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        let mut v = [a, b, c];
        v.sort_by_key(|v| v.y);
        let [top, mid, bottom] = v;
        Self { top, mid, bottom }
    }

    pub fn shape(&self) -> Shape {
        if self.mid.y == self.bottom.y {
            Shape::FlatBottom
        } else if self.top.y == self.mid.y {
            Shape::FlatTop
        } else {
            Shape::General
        }
    }
}

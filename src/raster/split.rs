use super::scanline::{clamp_coord, FlatTriangle};
use super::{SortedTriangle, Vertex};

/// Point on the long edge (top -> bottom) at the middle vertex's row.
///
/// `split_x = trunc((mid.y - top.y) / (bottom.y - top.y) * (bottom.x - top.x)) + top.x`
/// in f32, truncating like the row interpolation does.
pub fn split_point(sorted: &SortedTriangle) -> Vertex {
    let SortedTriangle { top, mid, bottom } = *sorted;
    debug_assert!(
        top.y < mid.y && mid.y < bottom.y,
        "split_point needs strictly increasing y, got {:?}",
        sorted
    );

    let t = (i64::from(mid.y) - i64::from(top.y)) as f32
        / (i64::from(bottom.y) - i64::from(top.y)) as f32;
    let dx = (i64::from(bottom.x) - i64::from(top.x)) as f32;
    let x = (t * dx) as i64 + i64::from(top.x);
    Vertex::new(clamp_coord(x), mid.y)
}

/// Cut a general triangle into a flat-bottom upper half and a flat-top lower
/// half sharing the split row.
pub fn split(sorted: &SortedTriangle) -> (FlatTriangle, FlatTriangle) {
    let at = split_point(sorted);
    (
        FlatTriangle::flat_bottom(sorted.top, sorted.mid, at),
        FlatTriangle::flat_top(sorted.mid, at, sorted.bottom),
    )
}

use tilepath_core::Point;

/// The 8 offsets around a cell, in expansion order.
///
/// X-major: x runs from -1 to 1 in the outer loop and y in the inner
/// one, with the centre skipped. The order decides which of several
/// equal-cost routes a search returns, so it must stay fixed.
pub const OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// The 8-connected neighbours of `p`, in [`OFFSETS`] order.
///
/// Neighbours that would fall outside the `i32` coordinate range are
/// left out.
#[inline]
pub fn neighbors_8(p: Point) -> impl Iterator<Item = Point> {
    OFFSETS.into_iter().filter_map(move |d| p.checked_shift(d.x, d.y))
}

use tilepath_core::Point;

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: i64 = 10;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: i64 = 14;

/// Octile distance between two cells: diagonal moves weigh
/// [`DIAGONAL_COST`], orthogonal moves weigh [`STRAIGHT_COST`].
///
/// This is both the exact step cost between adjacent cells and the
/// heuristic towards the target, as it equals the obstacle-free cost
/// between any two cells on an 8-connected grid.
///
/// Computed in `i64`, so any two `i32` points have a finite cost.
#[inline]
pub fn octile(a: Point, b: Point) -> i64 {
    let dx = i64::from(a.x.abs_diff(b.x));
    let dy = i64::from(a.y.abs_diff(b.y));
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
}

/// Total cost of walking `path` from `start`.
///
/// `path` is in the form returned by a search: it excludes `start` and
/// ends at the destination. An empty path costs nothing.
pub fn path_cost(start: Point, path: &[Point]) -> i64 {
    let mut prev = start;
    let mut total = 0;
    for &p in path {
        total += octile(prev, p);
        prev = p;
    }
    total
}

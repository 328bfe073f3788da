use tilepath_core::{Point, TileMap};

/// Passability oracle consumed by the search.
///
/// Must answer for any integer coordinate: cells that are out of bounds
/// or otherwise undefined report `false` rather than failing.
pub trait Grid {
    /// Whether the cell at `p` exists and can be walked through.
    fn is_passable(&self, p: Point) -> bool;
}

impl<G: Grid + ?Sized> Grid for &G {
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        (**self).is_passable(p)
    }
}

impl Grid for TileMap {
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        self.passable(p).unwrap_or(false)
    }
}

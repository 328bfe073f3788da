use std::collections::BinaryHeap;

use tilepath_core::Point;

use crate::distance::octile;
use crate::error::NotFound;
use crate::neighbors::neighbors_8;
use crate::node::{NodeArena, OpenEntry};
use crate::traits::Grid;

/// A* search over a read-only [`Grid`].
///
/// The pathfinder holds nothing but a borrow of the grid: every call to
/// [`find_path`](Self::find_path) builds its own open set, closed set and
/// nodes, and drops them before returning. Any number of pathfinders may
/// share one grid.
#[derive(Debug)]
pub struct Pathfinder<'a, G: Grid + ?Sized> {
    grid: &'a G,
}

impl<G: Grid + ?Sized> Clone for Pathfinder<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized> Copy for Pathfinder<'_, G> {}

impl<'a, G: Grid + ?Sized> Pathfinder<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'a G {
        self.grid
    }

    /// Whether `p` may be used as a destination at all.
    ///
    /// Lets callers reject a destination before running a search;
    /// [`find_path`](Self::find_path) performs the same check itself.
    #[inline]
    pub fn is_eligible_destination(&self, p: Point) -> bool {
        self.grid.is_passable(p)
    }

    /// Compute a cheapest 8-connected route from `start` to `target`.
    ///
    /// The returned path excludes `start` and ends with `target`; it is
    /// empty when `start == target`. Diagonal steps cost 14 and straight
    /// steps 10. Diagonal steps between two blocked orthogonal cells are
    /// allowed.
    ///
    /// Among equal-cost routes the result is fixed by the neighbour order
    /// in [`OFFSETS`](crate::neighbors::OFFSETS) and by expanding, among
    /// equally promising cells, the one discovered first.
    pub fn find_path(&self, start: Point, target: Point) -> Result<Vec<Point>, NotFound> {
        let not_found = NotFound { start, target };
        log::debug!("looking for path from {start} to {target}");

        if !self.grid.is_passable(target) {
            log::debug!("target {target} is not passable");
            return Err(not_found);
        }
        if start == target {
            return Ok(Vec::new());
        }

        let mut arena = NodeArena::new();
        let mut open = BinaryHeap::new();
        let mut seq: u64 = 0;

        let start_idx = arena.insert(start, true);
        // Passability of the target is already known.
        arena.insert(target, true);

        {
            let node = arena.node_mut(start_idx);
            node.h = octile(start, target);
            node.open = true;
        }
        open.push(OpenEntry {
            f: arena.node(start_idx).f(),
            seq,
            idx: start_idx,
        });
        seq += 1;

        let mut expanded = 0usize;

        while let Some(entry) = open.pop() {
            let ci = entry.idx;
            let current = arena.node(ci);

            // Skip stale entries.
            if current.closed || current.f() != entry.f {
                continue;
            }

            let (current_pos, current_g) = (current.position, current.g);
            {
                let node = arena.node_mut(ci);
                node.open = false;
                node.closed = true;
            }
            expanded += 1;

            if current_pos == target {
                let path = arena.retrace(ci);
                log::debug!(
                    "path found, steps: {}, cost: {current_g}, expanded: {expanded}, nodes: {}",
                    path.len(),
                    arena.len()
                );
                return Ok(path);
            }

            log::trace!("expanding {current_pos} (g={current_g}, f={})", entry.f);

            for np in neighbors_8(current_pos) {
                let ni = arena.get_or_query(self.grid, np);
                let neighbor = arena.node(ni);
                if !neighbor.passable || neighbor.closed {
                    continue;
                }

                let tentative_g = current_g + octile(current_pos, np);
                if neighbor.open && tentative_g >= neighbor.g {
                    continue;
                }

                let neighbor = arena.node_mut(ni);
                neighbor.g = tentative_g;
                neighbor.h = octile(np, target);
                neighbor.parent = Some(ci);
                neighbor.open = true;

                open.push(OpenEntry {
                    f: neighbor.f(),
                    seq,
                    idx: ni,
                });
                seq += 1;
            }
        }

        log::debug!("no path from {start} to {target}, expanded: {expanded}");
        Err(not_found)
    }
}

/// One-off search; see [`Pathfinder::find_path`].
pub fn find_path<G: Grid + ?Sized>(
    grid: &G,
    start: Point,
    target: Point,
) -> Result<Vec<Point>, NotFound> {
    Pathfinder::new(grid).find_path(start, target)
}

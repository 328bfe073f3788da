use std::cmp::Ordering;
use std::collections::HashMap;

use tilepath_core::Point;

use crate::traits::Grid;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One grid cell as seen by a single search.
///
/// `position` and `passable` are fixed when the node is created; the
/// costs and `parent` are revised whenever a cheaper route to the cell
/// turns up.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) position: Point,
    pub(crate) passable: bool,
    pub(crate) g: i64,
    pub(crate) h: i64,
    /// Arena index of the predecessor on the best known route.
    pub(crate) parent: Option<usize>,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Node {
    fn new(position: Point, passable: bool) -> Self {
        Self {
            position,
            passable,
            g: 0,
            h: 0,
            parent: None,
            open: false,
            closed: false,
        }
    }

    #[inline]
    pub(crate) fn f(&self) -> i64 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// Open set entries
// ---------------------------------------------------------------------------

/// Reference into the arena, ordered for use in a `BinaryHeap`.
///
/// Lower `f` pops first; among equal `f`, the lower `seq` (the entry
/// pushed earlier) pops first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Per-search node storage.
///
/// Nodes are addressed by index so parent links never own anything. Each
/// coordinate gets at most one node, and so at most one grid query, per
/// search.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    index: HashMap<Point, usize>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a node whose passability is already known.
    pub(crate) fn insert(&mut self, position: Point, passable: bool) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(position, passable));
        self.index.insert(position, idx);
        idx
    }

    /// Index of the node at `p`, creating it from a grid query if needed.
    pub(crate) fn get_or_query<G: Grid + ?Sized>(&mut self, grid: &G, p: Point) -> usize {
        if let Some(&idx) = self.index.get(&p) {
            return idx;
        }
        self.insert(p, grid.is_passable(p))
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links from `end` back to (but excluding) the root,
    /// returning positions in root-to-end order.
    pub(crate) fn retrace(&self, end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = end;
        while let Some(parent) = self.nodes[cur].parent {
            path.push(self.nodes[cur].position);
            cur = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    struct Open;

    impl Grid for Open {
        fn is_passable(&self, _p: Point) -> bool {
            true
        }
    }

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f: 30, seq: 0, idx: 0 });
        heap.push(OpenEntry { f: 20, seq: 2, idx: 1 });
        heap.push(OpenEntry { f: 20, seq: 1, idx: 2 });
        heap.push(OpenEntry { f: 40, seq: 3, idx: 3 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn one_node_per_coordinate() {
        let mut arena = NodeArena::new();
        let a = arena.get_or_query(&Open, Point::new(1, 2));
        let b = arena.get_or_query(&Open, Point::new(1, 2));
        assert_eq!(a, b);
        assert_eq!(arena.len(), 1);
        assert!(arena.node(a).passable);
    }

    #[test]
    fn retrace_excludes_root() {
        let mut arena = NodeArena::new();
        let root = arena.insert(Point::new(0, 0), true);
        let mid = arena.insert(Point::new(1, 1), true);
        let end = arena.insert(Point::new(2, 1), true);
        arena.node_mut(mid).parent = Some(root);
        arena.node_mut(end).parent = Some(mid);
        assert_eq!(arena.retrace(end), vec![Point::new(1, 1), Point::new(2, 1)]);
        assert!(arena.retrace(root).is_empty());
    }

    #[test]
    fn f_is_derived() {
        let mut arena = NodeArena::new();
        let i = arena.insert(Point::ZERO, true);
        let n = arena.node_mut(i);
        n.g = 24;
        n.h = 10;
        assert_eq!(arena.node(i).f(), 34);
    }
}

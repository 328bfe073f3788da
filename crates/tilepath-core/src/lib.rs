//! **tilepath-core** — geometry and tile maps for grid pathfinding.
//!
//! This crate provides the types shared across the *tilepath* workspace:
//! integer cell coordinates, rectangles, and an in-memory passability map
//! that can be parsed from ASCII art.

pub mod geom;
pub mod tilemap;

pub use geom::{Point, Range, RangeIter};
pub use tilemap::{FLOOR, MapError, TileMap, WALL};

//! A* shortest paths on 8-connected tile grids.
//!
//! The search only ever asks the map one question, through the [`Grid`]
//! trait: is this cell walkable? Anything that can answer it (a
//! [`TileMap`](tilepath_core::TileMap), a procedural world, a closure
//! over a game's own storage behind a small adapter) can be searched.
//!
//! ```
//! use tilepath_core::{Point, TileMap};
//! use tilepath_paths::{Pathfinder, path_cost};
//!
//! let map = TileMap::from_ascii(
//!     "
//! ....
//! .##.
//! ....
//! ",
//! )
//! .unwrap();
//! let pf = Pathfinder::new(&map);
//! let start = Point::new(0, 1);
//! let path = pf.find_path(start, Point::new(3, 1)).unwrap();
//! assert_eq!(path.last(), Some(&Point::new(3, 1)));
//! assert_eq!(path_cost(start, &path), 14 + 10 + 14);
//! ```
//!
//! Moves cost 10 orthogonally and 14 diagonally ([`octile`]); the same
//! function is the heuristic. Failures of every kind are reported as
//! [`NotFound`].

mod astar;
mod distance;
mod error;
pub mod neighbors;
mod node;
mod traits;

pub use astar::{Pathfinder, find_path};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile, path_cost};
pub use error::NotFound;
pub use traits::Grid;

//! A rectangular map of walkable and blocked tiles.
//!
//! [`TileMap`] owns its storage outright so that a map can be shared
//! read-only across threads while several searches run over it. Tiles
//! outside [`TileMap::bounds`] are undefined: [`TileMap::passable`]
//! reports `None` for them rather than failing.

use std::fmt;

use crate::geom::{Point, Range};

/// Character used for a blocked tile in the ASCII form.
pub const WALL: char = '#';
/// Character used for a walkable tile in the ASCII form.
pub const FLOOR: char = '.';

/// A 2D map recording, per tile, whether it can be walked through.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    tiles: Vec<bool>,
    bounds: Range,
}

impl TileMap {
    /// Create a `width` × `height` map with every tile passable.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            tiles: vec![true; bounds.len()],
            bounds,
        }
    }

    /// Parse a map from ASCII art: [`WALL`] blocks, [`FLOOR`] is walkable.
    ///
    /// Leading and trailing whitespace of the whole text is ignored, but
    /// every line must have the same width. Row `y` of the text becomes
    /// row `y` of the map.
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let passable = match ch {
                    FLOOR => true,
                    WALL => false,
                    _ => {
                        return Err(MapError::InvalidTile {
                            ch,
                            pos: Point::new(x, y as i32),
                        });
                    }
                };
                tiles.push(passable);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w as usize,
                        found: x as usize,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width.unwrap_or(0), height),
        })
    }

    /// The extent of the map.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the map.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let rel = p - self.bounds.min;
        Some(rel.y as usize * self.bounds.width() as usize + rel.x as usize)
    }

    /// Walkability of the tile at `p`, or `None` if no tile exists there.
    #[inline]
    pub fn passable(&self, p: Point) -> Option<bool> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Set the walkability of the tile at `p`.
    ///
    /// Returns `false` (and changes nothing) if `p` is outside the map.
    pub fn set_passable(&mut self, p: Point, passable: bool) -> bool {
        match self.index(p) {
            Some(i) => {
                self.tiles[i] = passable;
                true
            }
            None => false,
        }
    }

    /// Set every tile to the same walkability.
    pub fn fill(&mut self, passable: bool) {
        self.tiles.fill(passable);
    }

    /// Number of walkable tiles.
    pub fn count_passable(&self) -> usize {
        self.tiles.iter().filter(|&&t| t).count()
    }

    /// Row-major iterator over `(position, passable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds.width().max(1) as usize;
        for (i, row) in self.tiles.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &t in row {
                write!(f, "{}", if t { FLOOR } else { WALL })?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

/// Errors that can occur when parsing a [`TileMap`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contained no tiles.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than [`WALL`] or [`FLOOR`] was found.
    InvalidTile { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no tiles"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "map contains invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

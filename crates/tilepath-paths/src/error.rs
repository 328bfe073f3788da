use std::fmt;

use tilepath_core::Point;

/// No walkable route exists from `start` to `target`.
///
/// Returned alike for an impassable target, a target cut off from the
/// start, and a search that exhausted every reachable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotFound {
    pub start: Point,
    pub target: Point,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.start, self.target)
    }
}

impl std::error::Error for NotFound {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn not_found_round_trip() {
        let err = NotFound {
            start: Point::new(1, 2),
            target: Point::new(-3, 4),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: NotFound = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}

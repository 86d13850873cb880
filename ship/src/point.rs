use serde::{Deserialize, Serialize};

/// A cell on the planet grid.
///
/// Coordinates are 1-based: a grid of size `max` covers `1..=max.x` and `1..=max.y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)` and wraps the result back onto a grid of size `max`.
    ///
    /// Leaving the grid on one edge re-enters it on the opposite edge.
    /// Returns `None` if the grid has no cells, i.e. either side of `max` is below 1.
    #[must_use]
    pub fn offset_wrapped(self, dx: i32, dy: i32, max: Point) -> Option<Point> {
        Some(Point {
            x: wrap(self.x + dx, max.x)?,
            y: wrap(self.y + dy, max.y)?,
        })
    }

    pub fn is_within(self, max: Point) -> bool {
        (1..=max.x).contains(&self.x) && (1..=max.y).contains(&self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Maps any coordinate onto `1..=max`.
fn wrap(value: i32, max: i32) -> Option<i32> {
    if max < 1 {
        return None;
    }
    Some((value - 1).rem_euclid(max) + 1)
}

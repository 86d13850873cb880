use std::collections::BTreeSet;

use crate::Point;

/// The grid a ship sails on: its size and the cells it cannot enter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planet {
    max: Point,
    obstacles: BTreeSet<Point>,
}

impl Planet {
    /// Panics if the grid has no cells.
    pub fn new(max: Point, obstacles: impl IntoIterator<Item = Point>) -> Self {
        assert!(max.x > 0 && max.y > 0, "planet must be at least 1x1, got {}", max);
        Self {
            max,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn obstacles(&self) -> &BTreeSet<Point> {
        &self.obstacles
    }
}

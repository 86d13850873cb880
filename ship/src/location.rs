use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Direction, Point};

/// Where a ship is and which way it is facing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub position: Point,
    pub direction: Direction,
}

impl Location {
    pub fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Moves one cell ahead, wrapping around the edges of a grid of size `max`.
    ///
    /// Returns `false` and stays put if the target cell is an obstacle, or if
    /// `max` describes a grid without cells.
    pub fn forward(&mut self, max: Point, obstacles: &BTreeSet<Point>) -> bool {
        self.step_towards(self.direction, max, obstacles)
    }

    /// Like [`Self::forward()`], but moving against the heading.
    pub fn backward(&mut self, max: Point, obstacles: &BTreeSet<Point>) -> bool {
        self.step_towards(self.direction.opposite(), max, obstacles)
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// An independent location equal to this one.
    #[must_use]
    pub fn copy(&self) -> Location {
        *self
    }

    fn step_towards(
        &mut self,
        direction: Direction,
        max: Point,
        obstacles: &BTreeSet<Point>,
    ) -> bool {
        let (dx, dy) = direction.step();
        let Some(target) = self.position.offset_wrapped(dx, dy, max) else {
            trace!(%max, "Grid has no cells, cannot move");
            return false;
        };
        if obstacles.contains(&target) {
            trace!(from = %self.position, to = %target, "Blocked by obstacle");
            return false;
        }
        self.position = target;
        true
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::OpenWaters;

    const X: i32 = 12;
    const Y: i32 = 32;
    const MAX: Point = Point { x: 50, y: 50 };

    fn location() -> Location {
        Location::new(Point::new(X, Y), Direction::North)
    }

    fn facing(direction: Direction) -> Location {
        Location::new(Point::new(X, Y), direction)
    }

    fn no_obstacles() -> BTreeSet<Point> {
        BTreeSet::new()
    }

    quickcheck! {
        fn forward_then_backward_returns(waters: OpenWaters) -> bool {
            let OpenWaters { max, mut location } = waters;
            let start = location;
            let moved = location.forward(max, &no_obstacles());
            let back = location.backward(max, &no_obstacles());
            moved && back && location == start
        }

        fn moves_stay_on_the_grid(waters: OpenWaters) -> bool {
            let OpenWaters { max, mut location } = waters;
            location.forward(max, &no_obstacles());
            let after_forward = location.position().is_within(max);
            location.backward(max, &no_obstacles());
            location.backward(max, &no_obstacles());
            after_forward && location.position().is_within(max)
        }

        fn four_turns_are_a_full_circle(waters: OpenWaters) -> bool {
            let start = waters.location;
            let mut left = start;
            let mut right = start;
            for _ in 0..4 {
                left.turn_left();
                right.turn_right();
            }
            left == start && right == start
        }
    }

    #[test]
    fn stores_what_it_was_given() {
        let location = location();
        assert_eq!(location.x(), X);
        assert_eq!(location.y(), Y);
        assert_eq!(location.direction(), Direction::North);
    }

    #[test]
    fn forward_follows_the_heading() {
        let mut north = location();
        assert!(north.forward(MAX, &no_obstacles()));
        assert_eq!(north.y(), Y - 1);

        let mut south = facing(Direction::South);
        south.forward(MAX, &no_obstacles());
        assert_eq!(south.y(), Y + 1);

        let mut east = facing(Direction::East);
        east.forward(MAX, &no_obstacles());
        assert_eq!(east.x(), X + 1);

        let mut west = facing(Direction::West);
        west.forward(MAX, &no_obstacles());
        assert_eq!(west.x(), X - 1);
        assert_eq!(west.y(), Y);
    }

    #[test]
    fn backward_goes_against_the_heading() {
        let mut north = location();
        assert!(north.backward(MAX, &no_obstacles()));
        assert_eq!(north.y(), Y + 1);

        let mut south = facing(Direction::South);
        south.backward(MAX, &no_obstacles());
        assert_eq!(south.y(), Y - 1);

        let mut east = facing(Direction::East);
        east.backward(MAX, &no_obstacles());
        assert_eq!(east.x(), X - 1);

        let mut west = facing(Direction::West);
        west.backward(MAX, &no_obstacles());
        assert_eq!(west.x(), X + 1);
        assert_eq!(west.direction(), Direction::West);
    }

    #[test]
    fn turning() {
        let mut location = location();
        location.turn_left();
        assert_eq!(location.direction(), Direction::West);
        location.turn_left();
        assert_eq!(location.direction(), Direction::South);

        let mut location = self::location();
        location.turn_right();
        assert_eq!(location.direction(), Direction::East);
        assert_eq!(location.position(), Point::new(X, Y));
    }

    #[test]
    fn set_direction() {
        let mut location = location();
        location.set_direction(Direction::South);
        assert_eq!(location.direction(), Direction::South);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(location(), Location::new(Point::new(X, Y), Direction::North));
        assert_ne!(location(), Location::new(Point::new(X + 1, Y), Direction::North));
        assert_ne!(location(), Location::new(Point::new(X, Y + 1), Direction::North));
        assert_ne!(location(), Location::new(Point::new(X, Y), Direction::South));
    }

    #[test]
    fn copies_are_equal_and_independent() {
        let original = location();
        let mut copy = original.copy();
        assert_eq!(copy, original);
        copy.turn_left();
        copy.forward(MAX, &no_obstacles());
        assert_ne!(copy, original);
        assert_eq!(original, location());
    }

    #[test]
    fn wraps_around_the_edges() {
        let mut east = Location::new(Point::new(MAX.x, Y), Direction::East);
        east.forward(MAX, &no_obstacles());
        assert_eq!(east.x(), 1);

        let mut west = Location::new(Point::new(1, Y), Direction::West);
        west.forward(MAX, &no_obstacles());
        assert_eq!(west.x(), MAX.x);

        let mut north = Location::new(Point::new(X, 1), Direction::North);
        north.forward(MAX, &no_obstacles());
        assert_eq!(north.position(), Point::new(X, MAX.y));

        let mut south = Location::new(Point::new(X, MAX.y), Direction::South);
        south.forward(MAX, &no_obstacles());
        assert_eq!(south.y(), 1);
    }

    #[test]
    fn obstacles_block_moves() {
        let mut location = location();
        let ahead = BTreeSet::from([Point::new(X, Y - 1)]);
        assert!(!location.forward(MAX, &ahead));
        assert_eq!(location, self::location());

        let behind = BTreeSet::from([Point::new(X, Y + 1)]);
        assert!(!location.backward(MAX, &behind));
        assert_eq!(location, self::location());
        assert!(location.forward(MAX, &behind));
    }

    #[test]
    fn empty_grid_blocks_every_move() {
        let start = Location::new(Point::new(1, 1), Direction::North);
        let mut location = start;
        assert!(!location.forward(Point::new(0, 0), &no_obstacles()));
        assert!(!location.backward(Point::new(-3, 10), &no_obstacles()));
        assert!(!location.forward(Point::new(10, 0), &no_obstacles()));
        assert_eq!(location, start);
    }

    #[test]
    fn json_uses_short_direction_names() {
        let json = r#"{"position":{"x":12,"y":32},"direction":"N"}"#;
        let parsed: Location = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, location());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn obstacles_across_the_edge_block_wrapped_moves() {
        let mut location = Location::new(Point::new(MAX.x, Y), Direction::East);
        let obstacles = BTreeSet::from([Point::new(1, Y)]);
        assert!(!location.forward(MAX, &obstacles));
        assert_eq!(location.x(), MAX.x);
    }
}

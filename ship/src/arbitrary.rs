use quickcheck::{Arbitrary, Gen};

use crate::{Direction, Location, Point};

/// A grid without obstacles and a location somewhere on it.
#[derive(Clone, Debug)]
pub struct OpenWaters {
    pub max: Point,
    pub location: Location,
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ])
        .unwrap()
    }
}

impl Arbitrary for OpenWaters {
    fn arbitrary(g: &mut Gen) -> Self {
        let max = Point::new(
            i32::from(u8::arbitrary(g) % 50) + 1,
            i32::from(u8::arbitrary(g) % 50) + 1,
        );
        let position = Point::new(
            i32::from(u8::arbitrary(g)) % max.x + 1,
            i32::from(u8::arbitrary(g)) % max.y + 1,
        );
        OpenWaters {
            max,
            location: Location::new(position, Direction::arbitrary(g)),
        }
    }
}

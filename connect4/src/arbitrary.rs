use quickcheck::{Arbitrary, Gen};

/// A sequence of column choices, including some that are off the board.
#[derive(Clone, Debug)]
pub struct ColumnSequence(pub Vec<i32>);

impl Arbitrary for ColumnSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 60;
        // Columns -2 to 8, so that roughly one pick in five is out of range
        let columns = (0..len)
            .map(|_| (u8::arbitrary(g) % 11) as i32 - 2)
            .collect();
        ColumnSequence(columns)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(ColumnSequence))
    }
}

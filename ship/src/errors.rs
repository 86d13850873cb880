/// The error type for [`Ship::receive_commands()`](crate::Ship::receive_commands).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCommand {
    /// Position of the offending letter, counted in characters from zero.
    pub index: usize,
    pub letter: char,
}

impl std::error::Error for UnknownCommand {}

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown command '{}' at position {}, expected one of f, b, l, r",
            self.letter, self.index
        )
    }
}

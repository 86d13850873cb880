use tracing::debug;

use crate::{Location, Planet, UnknownCommand};

/// A single instruction for a [`Ship`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl Command {
    pub fn from_letter(letter: char) -> Option<Command> {
        match letter {
            'f' => Some(Command::Forward),
            'b' => Some(Command::Backward),
            'l' => Some(Command::Left),
            'r' => Some(Command::Right),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Command::Forward => 'f',
            Command::Backward => 'b',
            Command::Left => 'l',
            Command::Right => 'r',
        }
    }
}

/// Parses a string such as `"ffrbl"` into commands.
pub fn parse_commands(commands: &str) -> Result<Vec<Command>, UnknownCommand> {
    commands
        .chars()
        .enumerate()
        .map(|(index, letter)| {
            Command::from_letter(letter).ok_or(UnknownCommand { index, letter })
        })
        .collect()
}

/// What happened to each command of a sequence.
///
/// Displays as one letter per command: `O` if it was carried out, `X` if an
/// obstacle was in the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandReport {
    pub outcomes: Vec<(Command, bool)>,
}

impl CommandReport {
    pub fn blocked_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, done)| !done).count()
    }
}

impl std::fmt::Display for CommandReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &(_, done) in &self.outcomes {
            write!(f, "{}", if done { 'O' } else { 'X' })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Ship {
    location: Location,
    planet: Planet,
}

impl Ship {
    pub fn new(location: Location, planet: Planet) -> Self {
        Self { location, planet }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    /// Carries out one command. Only moves can fail, when an obstacle is in the way.
    pub fn execute(&mut self, command: Command) -> bool {
        let max = self.planet.max();
        match command {
            Command::Forward => self.location.forward(max, self.planet.obstacles()),
            Command::Backward => self.location.backward(max, self.planet.obstacles()),
            Command::Left => {
                self.location.turn_left();
                true
            }
            Command::Right => {
                self.location.turn_right();
                true
            }
        }
    }

    /// Runs a whole command string.
    ///
    /// Nothing is executed if any letter is unknown. A blocked move does not
    /// stop the remaining commands.
    pub fn receive_commands(&mut self, commands: &str) -> Result<CommandReport, UnknownCommand> {
        let commands = parse_commands(commands)?;
        let mut report = CommandReport::default();
        for command in commands {
            let done = self.execute(command);
            debug!(command = %command.letter(), done, location = %self.location);
            report.outcomes.push((command, done));
        }
        Ok(report)
    }
}

//! A two-player Connect-Four engine that reports every move on a text output.

pub use board::*;
pub use disc::*;
pub use engine::*;
pub use errors::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod disc;
mod engine;
mod errors;
mod visualization;

//! A ship on a bounded, wrap-around grid, steered by single-letter commands.

pub use direction::*;
pub use errors::*;
pub use location::*;
pub use planet::*;
pub use point::*;
pub use ship::*;

#[cfg(test)]
mod arbitrary;
mod direction;
mod errors;
mod location;
mod planet;
mod point;
mod ship;

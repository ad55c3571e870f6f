//! A snowman building puzzle: a monster pushes snowballs around a grid, balls
//! grow on snow, smaller balls stack on larger ones, and a big, mid and small
//! ball stacked together make a snowman.
//!
//! [`core::Board`] is the simulation. Everything that draws it or reads input
//! lives outside this crate and listens through [`core::BoardObserver`].

pub mod config;
pub mod core;
pub mod error;
pub mod level;
pub mod records;
pub mod session;

#[cfg(test)]
mod test;

pub use config::GameConfig;
pub use error::{LevelError, RecordError};

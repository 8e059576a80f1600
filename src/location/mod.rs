//! Fishing locations: archetypes, species tables, and the water grid.

#![allow(unused_imports)]

pub mod generation;
pub mod grid;
pub mod types;

pub use generation::*;
pub use grid::*;
pub use types::*;

//! Fishing encounters: cast validation, bites, fish rolls, and the fight.

#![allow(unused_imports)]

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;

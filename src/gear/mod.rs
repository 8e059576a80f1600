//! Fishing gear: rods, leaders, flies, and their option catalogs.

#![allow(unused_imports)]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;

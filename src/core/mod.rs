//! Shared constants and the injectable random source.

#![allow(unused_imports)]

pub mod constants;
pub mod rng;

pub use constants::*;
pub use rng::*;

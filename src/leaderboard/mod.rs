//! Persistent ranking of every player who has landed a fish.

#![allow(unused_imports)]

pub mod ranking;
pub mod store;

pub use ranking::*;
pub use store::*;

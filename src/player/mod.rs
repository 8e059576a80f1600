//! Player identity, catch history, and experience.

#![allow(unused_imports)]

pub mod progress;

pub use progress::*;

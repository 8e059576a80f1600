//! Terminal front end pieces: rendering and line input.

pub mod fishing_scene;
pub mod prompt;

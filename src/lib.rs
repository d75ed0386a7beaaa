//! Core engine for a single-player sea battle game: random fleet placement
//! on a square grid plus shot resolution and game-over tracking.
//!
//! The library owns no I/O. Rendering and input capture live in the thin CLI
//! front end (`main.rs` / [`ui`]); the engine is driven entirely through
//! [`Game`].

mod common;
mod config;
mod game;
mod grid;
mod logging;
mod placement;
mod ship;
pub mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use ship::*;

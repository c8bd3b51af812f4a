//! Space-invaders style arcade prototype built on SDL2, plus a warp-speed
//! starfield demo.
//!
//! The simulation (`game`, `player`, `enemy`, `bullet`, `collision`) has no
//! SDL window dependency and runs on a fixed timestep driven by the front
//! ends in `src/main.rs` and `src/bin/starfield.rs`.

pub mod bullet;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod error;
pub mod game;
pub mod input_system;
pub mod player;
pub mod render;
pub mod save;
pub mod starfield;
pub mod timestep;
pub mod title;

pub use config::GameConfig;
pub use error::{GameError, GameResult};

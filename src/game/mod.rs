// Game module - owns the simulation of the shooter
//
// This module contains:
// - world.rs: GameWorld struct, spawning, per-tick update and collision resolution
// - types.rs: shared enums and the per-tick control snapshot

pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;

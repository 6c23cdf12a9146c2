//! Game engine for FRONTLINE.
//!
//! Owns the game state (a hecs world plus the player), runs the per-frame
//! update, collision and wave loop, and talks to the outside world only
//! through the sink traits in [`scene`], [`sinks`] and [`assets`].

pub mod assets;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod input;
pub mod scene;
pub mod sinks;
pub mod systems;
pub mod world_setup;

pub use engine::{Collaborators, GameEngine, SimConfig};
pub use error::EngineError;
pub use game_state::PlayerLoadout;

#[cfg(test)]
mod tests;

//! Systems run by the engine each frame.
//!
//! Systems are free functions over `&mut World` (or the whole `GameState`
//! when they touch the player or score). They own no state.

pub mod camera;
pub mod cleanup;
pub mod collision;
pub mod enemy;
pub mod particles;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;

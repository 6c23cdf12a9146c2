//! Game state snapshot: the visible state handed to the HUD each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::types::SimTime;

/// Everything the overlay needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Current wave number (0 before the first wave).
    pub wave: u32,
    /// Frames per second derived from the raw (unclamped) frame delta.
    pub fps: u32,
    pub enemies: u32,
    pub projectiles: u32,
    pub particles: u32,
    pub player_position: Vec3,
}

impl GameStateSnapshot {
    /// Health rounded up, the way the overlay shows it.
    pub fn display_health(&self) -> u32 {
        self.health.max(0.0).ceil() as u32
    }
}

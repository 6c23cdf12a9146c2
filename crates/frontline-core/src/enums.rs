//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::TextureHandle;

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but not yet initialized (or initialization failed).
    #[default]
    Idle,
    Running,
    Paused,
    /// Player health reached zero. Terminal for the session.
    GameOver,
}

/// Who fired a projectile. Decides what it can hit and how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOrigin {
    Player,
    Enemy,
}

/// What a scene node represents, so the renderer can pick a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    Skybox,
    /// Ground plane. `None` means the default untextured material.
    Terrain { texture: Option<TextureHandle> },
    Wall,
    Enemy,
    Projectile(ProjectileOrigin),
    Particle { color: u32 },
}

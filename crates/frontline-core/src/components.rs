//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOrigin;
use crate::types::NodeId;

/// Logical position and facing of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Facing about +Y in radians.
    pub yaw: f32,
}

/// The scene node that renders this entity. Must be live while the entity exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    pub node: NodeId,
}

/// A hostile turret-like enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// May drop below zero on the frame it is killed; removal happens on the next enemy pass.
    pub health: f32,
    pub max_health: f32,
    /// Scales with wave number. Enemies hold position, so this is informational.
    pub speed: f32,
    /// Damage of its projectiles, and contact damage per second.
    pub damage: f32,
    /// Seconds between two shots.
    pub attack_cooldown_secs: f32,
    /// Seconds until the next shot is allowed.
    pub cooldown_remaining: f32,
}

/// A projectile travelling in a straight line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: ProjectileOrigin,
    /// Unit direction of travel.
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
    /// Seconds remaining before the projectile expires.
    pub lifetime: f32,
}

/// A short-lived visual particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub velocity: Vec3,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

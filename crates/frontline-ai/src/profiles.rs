//! Per-wave enemy profiles.
//!
//! Consolidates the difficulty curve: how many enemies a wave spawns and
//! what stats each of them carries.

use frontline_core::constants::*;

/// Stats shared by every enemy of one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveProfile {
    pub wave: u32,
    /// Number of enemies spawned when the wave starts.
    pub enemy_count: u32,
    pub health: f32,
    pub speed: f32,
    /// Projectile damage, and contact damage per second.
    pub damage: f32,
    pub attack_range: f32,
    pub attack_cooldown_secs: f32,
}

impl WaveProfile {
    /// Profile for wave `wave` (1-based).
    pub fn for_wave(wave: u32) -> Self {
        let n = wave as f32;
        Self {
            wave,
            enemy_count: WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * wave,
            health: ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_WAVE * n,
            speed: ENEMY_BASE_SPEED + ENEMY_SPEED_PER_WAVE * n,
            damage: ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_WAVE * n,
            attack_range: ENEMY_ATTACK_RANGE,
            attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN,
        }
    }

    /// Spawn angle (radians) of enemy `index` on the wave circle.
    pub fn spawn_angle(&self, index: u32) -> f32 {
        std::f32::consts::TAU * index as f32 / self.enemy_count as f32
    }
}

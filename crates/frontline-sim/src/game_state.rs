//! The session aggregate: everything that is thrown away on restart.

use glam::Vec3;
use hecs::World;
use serde::{Deserialize, Serialize};

use frontline_core::constants::*;
use frontline_core::enums::GamePhase;
use frontline_core::events::AudioCue;
use frontline_core::types::SimTime;

/// Player stats chosen before the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerLoadout {
    pub max_health: f32,
    pub max_ammo: u32,
    /// Minimum game time between shots.
    pub fire_interval: f32,
    pub projectile_damage: f32,
}

impl Default for PlayerLoadout {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            max_ammo: PLAYER_MAX_AMMO,
            fire_interval: PLAYER_FIRE_INTERVAL,
            projectile_damage: PLAYER_PROJECTILE_DAMAGE,
        }
    }
}

/// The player. Not an ECS entity: there is exactly one and it has no visual.
#[derive(Debug, Clone)]
pub struct Player {
    /// Feet position.
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub fire_interval: f32,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f32,
    pub projectile_damage: f32,
}

impl Player {
    pub fn new(loadout: &PlayerLoadout) -> Self {
        Self {
            position: Vec3::from_array(PLAYER_START),
            vertical_velocity: 0.0,
            grounded: true,
            health: loadout.max_health,
            max_health: loadout.max_health,
            ammo: loadout.max_ammo,
            max_ammo: loadout.max_ammo,
            fire_interval: loadout.fire_interval,
            fire_cooldown: 0.0,
            projectile_damage: loadout.projectile_damage,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * EYE_HEIGHT
    }

    /// Health never drops below zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Health never exceeds max health.
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn reload(&mut self) {
        self.ammo = self.max_ammo;
    }

    /// Spend one round if the weapon is ready. Returns whether a shot goes out.
    pub fn try_fire(&mut self) -> bool {
        if self.ammo == 0 || self.fire_cooldown > 0.0 {
            return false;
        }
        self.ammo -= 1;
        self.fire_cooldown = self.fire_interval;
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveState {
    #[default]
    NoWave,
    InProgress(u32),
}

impl WaveState {
    /// Current wave number, 0 before the first wave.
    pub fn number(self) -> u32 {
        match self {
            WaveState::NoWave => 0,
            WaveState::InProgress(n) => n,
        }
    }
}

/// Side effects collected during an update and flushed to the sinks after it.
#[derive(Debug, Default)]
pub struct FrameEvents {
    pub audio: Vec<AudioCue>,
    pub damage_flash: bool,
}

/// One game session. Owned by the engine; replaced wholesale on restart.
pub struct GameState {
    /// Enemies, projectiles and particles.
    pub world: World,
    pub player: Player,
    pub phase: GamePhase,
    pub score: u32,
    pub wave: WaveState,
    pub time: SimTime,
    /// Set once the game-over transition has run.
    pub game_over_reported: bool,
}

impl GameState {
    pub fn new(loadout: &PlayerLoadout) -> Self {
        Self {
            world: World::new(),
            player: Player::new(loadout),
            phase: GamePhase::default(),
            score: 0,
            wave: WaveState::default(),
            time: SimTime::default(),
            game_over_reported: false,
        }
    }
}

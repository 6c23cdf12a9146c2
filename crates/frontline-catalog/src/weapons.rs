//! Weapon, ammunition and attachment records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponClass {
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
    Smg,
    Launcher,
    Melee,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FireMode {
    SemiAuto,
    FullAuto,
    Burst,
    Pump,
    BoltAction,
    Melee,
    Continuous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponSpec {
    pub id: String,
    pub name: String,
    pub class: WeaponClass,
    pub damage: f32,
    /// Seconds between two shots.
    pub fire_rate: f32,
    /// `None` for melee weapons.
    #[serde(default)]
    pub magazine_size: Option<u32>,
    #[serde(default)]
    pub ammo_type: Option<String>,
    /// 0..1
    pub accuracy: f32,
    pub recoil: f32,
    pub range: f32,
    pub weight: f32,
    pub fire_modes: Vec<FireMode>,
    pub reload_time: f32,
    pub equip_time: f32,
    #[serde(default)]
    pub muzzle_velocity: Option<f32>,
    pub armor_penetration: f32,
    pub knockback: f32,
    #[serde(default)]
    pub pellets_per_shot: Option<u32>,
    /// Degrees.
    #[serde(default)]
    pub spread_angle: Option<f32>,
    #[serde(default)]
    pub zoom_level: Option<f32>,
    #[serde(default)]
    pub one_hit_kill: bool,
    #[serde(default)]
    pub explosion_radius: Option<f32>,
    /// Damage per second while burning.
    #[serde(default)]
    pub burn_damage: Option<f32>,
    pub description: String,
}

impl WeaponSpec {
    /// Whether the weapon fires projectiles (everything but melee).
    pub fn is_ranged(&self) -> bool {
        self.magazine_size.is_some()
    }

    /// Shots per second.
    pub fn rounds_per_second(&self) -> f32 {
        if self.fire_rate > 0.0 {
            1.0 / self.fire_rate
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoSpec {
    pub id: String,
    /// Metres per second.
    pub velocity: f32,
    pub penetration: f32,
    /// Grams per round.
    pub weight: f32,
    pub cost: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentSlot {
    Scope,
    Barrel,
    Magazine,
    Grip,
}

/// A weapon attachment. Only the modifiers it declares are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSpec {
    pub id: String,
    pub slot: AttachmentSlot,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<f32>,
    #[serde(default)]
    pub aim_speed: Option<f32>,
    #[serde(default)]
    pub zoom_level: Option<f32>,
    #[serde(default)]
    pub heat_detection: bool,
    /// Loudness change in dB.
    #[serde(default)]
    pub sound: Option<f32>,
    #[serde(default)]
    pub damage: Option<f32>,
    #[serde(default)]
    pub range: Option<f32>,
    #[serde(default)]
    pub muzzle_flash: Option<f32>,
    #[serde(default)]
    pub ammo_bonus: Option<f32>,
    #[serde(default)]
    pub reload_time: Option<f32>,
    #[serde(default)]
    pub recoil: Option<f32>,
    pub weight: f32,
    pub cost: u32,
}

/// Layout of `data/weapons.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeaponTables {
    pub weapons: Vec<WeaponSpec>,
    pub ammo_types: Vec<AmmoSpec>,
    pub attachments: Vec<AttachmentSpec>,
}

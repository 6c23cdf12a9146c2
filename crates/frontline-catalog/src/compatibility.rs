//! Character-class bonuses for weapon classes, and per-class starting kits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::characters::CharacterClass;
use crate::weapons::{WeaponClass, WeaponSpec};

/// Multipliers a character class gets with a weapon class. Unset means 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponBonus {
    #[serde(default)]
    pub damage: Option<f32>,
    #[serde(default)]
    pub accuracy: Option<f32>,
    /// Rate of fire multiplier. Higher fires faster.
    #[serde(default)]
    pub fire_rate: Option<f32>,
    #[serde(default)]
    pub range: Option<f32>,
    #[serde(default)]
    pub weight: Option<f32>,
}

impl WeaponBonus {
    /// Apply the bonus to `weapon`. Accuracy stays within 0..=1.
    pub fn apply(&self, weapon: &mut WeaponSpec) {
        if let Some(m) = self.damage {
            weapon.damage *= m;
        }
        if let Some(m) = self.accuracy {
            weapon.accuracy = (weapon.accuracy * m).min(1.0);
        }
        // `fire_rate` on a weapon is the interval between shots.
        if let Some(m) = self.fire_rate {
            if m > 0.0 {
                weapon.fire_rate /= m;
            }
        }
        if let Some(m) = self.range {
            weapon.range *= m;
        }
        if let Some(m) = self.weight {
            weapon.weight *= m;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingTemplate {
    pub primary_weapon: String,
    pub secondary_weapon: String,
    pub melee: String,
    pub armor: String,
    pub helmet: String,
}

/// Layout of `data/compatibility.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompatibilityTables {
    pub class_weapon_bonuses: BTreeMap<CharacterClass, BTreeMap<WeaponClass, WeaponBonus>>,
    pub starting_templates: BTreeMap<CharacterClass, StartingTemplate>,
}

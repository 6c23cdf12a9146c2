//! Playable characters, their abilities, equipment, skills and progression.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Assault,
    Sniper,
    Support,
    Recon,
    Engineer,
    Medic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Alpha,
    Bravo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    pub health: f32,
    pub armor: f32,
    pub speed: f32,
    pub stamina: f32,
    pub reload_speed: f32,
    pub turn_speed: f32,
    pub jump_height: f32,
    pub firearm_accuracy: f32,
    pub melee_accuracy: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub armor: String,
    pub helmet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSpec {
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub avatar: String,
    pub faction: Faction,
    pub stats: CharacterStats,
    pub starting_weapon: String,
    pub secondary_weapon: String,
    pub abilities: Vec<String>,
    pub passive_abilities: Vec<String>,
    /// Grenade kind -> count.
    pub grenades: BTreeMap<String, u32>,
    pub equipment: Equipment,
    pub description: String,
    pub experience_multiplier: f32,
    pub cost_in_currency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKind {
    Active,
    Passive,
}

/// One entry of an ability's effect table: a magnitude or a switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectValue {
    Flag(bool),
    Amount(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AbilityKind,
    /// Seconds; passives have none.
    #[serde(default)]
    pub cooldown: Option<f32>,
    #[serde(default)]
    pub duration: Option<f32>,
    pub effect: BTreeMap<String, EffectValue>,
    #[serde(default)]
    pub range: Option<f32>,
    #[serde(default)]
    pub radius: Option<f32>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorSpec {
    pub id: String,
    pub name: String,
    pub protection: f32,
    pub weight: f32,
    /// Movement speed multiplier.
    pub mobility: f32,
    pub cost: u32,
    #[serde(default)]
    pub explosion_resistance: Option<f32>,
    #[serde(default)]
    pub heal_bonus: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmetSpec {
    pub id: String,
    pub name: String,
    pub headshot_reduction: f32,
    pub weight: f32,
    pub cost: u32,
    #[serde(default)]
    pub vision_bonus: Option<f32>,
    #[serde(default)]
    pub heal_bonus: Option<f32>,
    #[serde(default)]
    pub target_tracking: bool,
}

/// A trainable skill: `stat = base + per_level * level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSpec {
    pub id: String,
    pub name: String,
    /// Stat the skill modifies.
    pub stat: String,
    pub max_level: u32,
    pub base: f32,
    pub per_level: f32,
    pub description: String,
}

impl SkillSpec {
    /// Stat value at `level`, capped at the skill's max level.
    pub fn value_at(&self, level: u32) -> f32 {
        self.base + self.per_level * level.min(self.max_level) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRewards {
    pub currency: u32,
    pub battle_pass: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSpec {
    pub id: String,
    pub min_level: u32,
    pub max_level: u32,
    pub rewards: RankRewards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub max_level: u32,
    /// Experience needed to reach level `i + 1`.
    pub experience_per_level: Vec<u32>,
    pub ranks: Vec<RankSpec>,
    pub achievements: Vec<AchievementSpec>,
}

/// Layout of `data/characters.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CharacterTables {
    pub characters: Vec<CharacterSpec>,
    pub abilities: Vec<AbilitySpec>,
    pub armor: Vec<ArmorSpec>,
    pub helmets: Vec<HelmetSpec>,
    pub skills: Vec<SkillSpec>,
    pub progression: Progression,
}

//! The loaded catalog and its lookups.

use std::collections::BTreeMap;
use std::fmt;

use crate::characters::*;
use crate::compatibility::{CompatibilityTables, StartingTemplate, WeaponBonus};
use crate::error::CatalogError;
use crate::weapons::*;

const WEAPONS_JSON: &str = include_str!("../data/weapons.json");
const CHARACTERS_JSON: &str = include_str!("../data/characters.json");
const COMPATIBILITY_JSON: &str = include_str!("../data/compatibility.json");

/// A reference from one record to another that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    /// Record holding the reference, e.g. `character iron-forge`.
    pub owner: String,
    pub field: &'static str,
    pub missing: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} refers to unknown `{}`", self.owner, self.field, self.missing)
    }
}

/// All static game data, indexed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: BTreeMap<String, WeaponSpec>,
    ammo: BTreeMap<String, AmmoSpec>,
    attachments: BTreeMap<String, AttachmentSpec>,
    characters: BTreeMap<String, CharacterSpec>,
    abilities: BTreeMap<String, AbilitySpec>,
    armor: BTreeMap<String, ArmorSpec>,
    helmets: BTreeMap<String, HelmetSpec>,
    skills: BTreeMap<String, SkillSpec>,
    progression: Progression,
    class_weapon_bonuses: BTreeMap<CharacterClass, BTreeMap<WeaponClass, WeaponBonus>>,
    starting_templates: BTreeMap<CharacterClass, StartingTemplate>,
}

fn index<T>(records: Vec<T>, id: impl Fn(&T) -> &str) -> BTreeMap<String, T> {
    records
        .into_iter()
        .map(|record| (id(&record).to_string(), record))
        .collect()
}

impl Catalog {
    /// Parse the embedded tables.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(WEAPONS_JSON, CHARACTERS_JSON, COMPATIBILITY_JSON)
    }

    /// Parse tables from JSON text.
    pub fn from_json(
        weapons: &str,
        characters: &str,
        compatibility: &str,
    ) -> Result<Self, CatalogError> {
        let w: WeaponTables = serde_json::from_str(weapons).map_err(|source| {
            CatalogError::Parse {
                table: "weapons",
                source,
            }
        })?;
        let c: CharacterTables = serde_json::from_str(characters).map_err(|source| {
            CatalogError::Parse {
                table: "characters",
                source,
            }
        })?;
        let x: CompatibilityTables = serde_json::from_str(compatibility).map_err(|source| {
            CatalogError::Parse {
                table: "compatibility",
                source,
            }
        })?;

        let catalog = Self {
            weapons: index(w.weapons, |r| r.id.as_str()),
            ammo: index(w.ammo_types, |r| r.id.as_str()),
            attachments: index(w.attachments, |r| r.id.as_str()),
            characters: index(c.characters, |r| r.id.as_str()),
            abilities: index(c.abilities, |r| r.id.as_str()),
            armor: index(c.armor, |r| r.id.as_str()),
            helmets: index(c.helmets, |r| r.id.as_str()),
            skills: index(c.skills, |r| r.id.as_str()),
            progression: c.progression,
            class_weapon_bonuses: x.class_weapon_bonuses,
            starting_templates: x.starting_templates,
        };
        tracing::debug!(
            weapons = catalog.weapons.len(),
            characters = catalog.characters.len(),
            abilities = catalog.abilities.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn weapon(&self, id: &str) -> Option<&WeaponSpec> {
        self.weapons.get(id)
    }

    pub fn weapons(&self) -> impl Iterator<Item = &WeaponSpec> {
        self.weapons.values()
    }

    pub fn weapons_of_class(&self, class: WeaponClass) -> Vec<&WeaponSpec> {
        self.weapons.values().filter(|w| w.class == class).collect()
    }

    pub fn ammo(&self, id: &str) -> Option<&AmmoSpec> {
        self.ammo.get(id)
    }

    pub fn attachment(&self, id: &str) -> Option<&AttachmentSpec> {
        self.attachments.get(id)
    }

    pub fn attachments_for_slot(&self, slot: AttachmentSlot) -> Vec<&AttachmentSpec> {
        self.attachments.values().filter(|a| a.slot == slot).collect()
    }

    pub fn character(&self, id: &str) -> Option<&CharacterSpec> {
        self.characters.get(id)
    }

    pub fn characters(&self) -> impl Iterator<Item = &CharacterSpec> {
        self.characters.values()
    }

    pub fn characters_of_class(&self, class: CharacterClass) -> Vec<&CharacterSpec> {
        self.characters.values().filter(|c| c.class == class).collect()
    }

    pub fn ability(&self, id: &str) -> Option<&AbilitySpec> {
        self.abilities.get(id)
    }

    pub fn armor(&self, id: &str) -> Option<&ArmorSpec> {
        self.armor.get(id)
    }

    pub fn helmet(&self, id: &str) -> Option<&HelmetSpec> {
        self.helmets.get(id)
    }

    pub fn skill(&self, id: &str) -> Option<&SkillSpec> {
        self.skills.get(id)
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Experience needed to reach `level` (1-based).
    pub fn experience_for_level(&self, level: u32) -> Result<u32, CatalogError> {
        let max = self.progression.max_level;
        if level == 0 || level > max {
            return Err(CatalogError::LevelOutOfRange { level, max });
        }
        self.progression
            .experience_per_level
            .get(level as usize - 1)
            .copied()
            .ok_or(CatalogError::LevelOutOfRange { level, max })
    }

    pub fn rank_for_level(&self, level: u32) -> Option<&RankSpec> {
        self.progression
            .ranks
            .iter()
            .find(|r| (r.min_level..=r.max_level).contains(&level))
    }

    /// Bonus a character class gets with a weapon class, if any.
    pub fn class_bonus(
        &self,
        character: CharacterClass,
        weapon: WeaponClass,
    ) -> Option<&WeaponBonus> {
        self.class_weapon_bonuses.get(&character)?.get(&weapon)
    }

    /// The weapon as wielded by the character, class bonuses applied.
    pub fn effective_weapon(
        &self,
        character_id: &str,
        weapon_id: &str,
    ) -> Result<WeaponSpec, CatalogError> {
        let character = self
            .character(character_id)
            .ok_or_else(|| CatalogError::UnknownCharacter(character_id.to_string()))?;
        let mut weapon = self
            .weapon(weapon_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWeapon(weapon_id.to_string()))?;
        if let Some(bonus) = self.class_bonus(character.class, weapon.class) {
            bonus.apply(&mut weapon);
        }
        Ok(weapon)
    }

    pub fn starting_template(&self, class: CharacterClass) -> Option<&StartingTemplate> {
        self.starting_templates.get(&class)
    }

    /// Check every cross-reference between tables. Dangling references are
    /// reported, not fatal.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut check = |owner: &str, field: &'static str, id: &str, known: bool| {
            if !known {
                issues.push(CatalogIssue {
                    owner: owner.to_string(),
                    field,
                    missing: id.to_string(),
                });
            }
        };

        for weapon in self.weapons.values() {
            let owner = format!("weapon {}", weapon.id);
            if let Some(ammo) = &weapon.ammo_type {
                check(&owner, "ammoType", ammo, self.ammo.contains_key(ammo));
            }
        }

        for c in self.characters.values() {
            let owner = format!("character {}", c.id);
            for (field, id) in [
                ("startingWeapon", &c.starting_weapon),
                ("secondaryWeapon", &c.secondary_weapon),
            ] {
                check(&owner, field, id, self.weapons.contains_key(id));
            }
            for id in &c.abilities {
                check(&owner, "abilities", id, self.abilities.contains_key(id));
            }
            for id in &c.passive_abilities {
                check(&owner, "passiveAbilities", id, self.abilities.contains_key(id));
            }
            check(
                &owner,
                "armor",
                &c.equipment.armor,
                self.armor.contains_key(&c.equipment.armor),
            );
            check(
                &owner,
                "helmet",
                &c.equipment.helmet,
                self.helmets.contains_key(&c.equipment.helmet),
            );
        }

        for (class, t) in &self.starting_templates {
            let owner = format!("template {class:?}");
            for (field, id) in [
                ("primaryWeapon", &t.primary_weapon),
                ("secondaryWeapon", &t.secondary_weapon),
                ("melee", &t.melee),
            ] {
                check(&owner, field, id, self.weapons.contains_key(id));
            }
            check(&owner, "armor", &t.armor, self.armor.contains_key(&t.armor));
            check(&owner, "helmet", &t.helmet, self.helmets.contains_key(&t.helmet));
        }

        issues
    }
}

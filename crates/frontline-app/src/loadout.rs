//! Turning a catalog character and weapon into the engine's player loadout.

use anyhow::bail;

use frontline_catalog::{Catalog, CatalogError};
use frontline_core::constants::PLAYER_MAX_AMMO;
use frontline_sim::PlayerLoadout;

/// Loadout for `character_id` carrying `weapon_id`, or the character's
/// starting weapon when none is given. Class bonuses are applied.
pub fn for_character(
    catalog: &Catalog,
    character_id: &str,
    weapon_id: Option<&str>,
) -> anyhow::Result<PlayerLoadout> {
    let character = catalog
        .character(character_id)
        .ok_or_else(|| CatalogError::UnknownCharacter(character_id.to_string()))?;
    let weapon_id = weapon_id.unwrap_or(&character.starting_weapon);
    let weapon = catalog.effective_weapon(&character.id, weapon_id)?;
    if !weapon.is_ranged() {
        bail!("`{}` is a melee weapon and cannot fire projectiles", weapon.id);
    }

    let loadout = PlayerLoadout {
        max_health: character.stats.health,
        max_ammo: PLAYER_MAX_AMMO,
        fire_interval: weapon.fire_rate,
        projectile_damage: weapon.damage,
    };
    tracing::debug!(
        character = %character.id,
        weapon = %weapon.id,
        damage = loadout.projectile_damage,
        fire_interval = loadout.fire_interval,
        "loadout selected"
    );
    Ok(loadout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_default_weapon_with_class_bonus() {
        let loadout = for_character(&catalog(), "commando-jack", None).unwrap();
        assert_eq!(loadout.max_health, 100.0);
        assert_eq!(loadout.max_ammo, PLAYER_MAX_AMMO);
        assert!((loadout.projectile_damage - 44.0).abs() < 1e-3);
        assert!((loadout.fire_interval - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_weapon_override() {
        let loadout = for_character(&catalog(), "iron-forge", Some("glock19")).unwrap();
        assert_eq!(loadout.max_health, 120.0);
        assert_eq!(loadout.projectile_damage, 25.0);
    }

    #[test]
    fn test_dangling_starting_weapon_is_an_error() {
        let err = for_character(&catalog(), "iron-forge", None).unwrap_err();
        assert!(err.to_string().contains("m249"));
    }

    #[test]
    fn test_melee_weapon_rejected() {
        let err = for_character(&catalog(), "ghost-ninja", Some("knife")).unwrap_err();
        assert!(err.to_string().contains("melee"));
    }

    #[test]
    fn test_unknown_character() {
        let err = for_character(&catalog(), "nobody", None).unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }
}

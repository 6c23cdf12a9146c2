//! Snapshot system: builds the HUD view of the session.
//!
//! Read-only; never modifies the world.

use hecs::World;

use frontline_core::components::{Enemy, Particle, Projectile};
use frontline_core::state::GameStateSnapshot;

use crate::game_state::GameState;

pub fn build_snapshot(state: &GameState, fps: u32) -> GameStateSnapshot {
    GameStateSnapshot {
        time: state.time,
        phase: state.phase,
        score: state.score,
        health: state.player.health,
        max_health: state.player.max_health,
        ammo: state.player.ammo,
        max_ammo: state.player.max_ammo,
        wave: state.wave.number(),
        fps,
        enemies: living_enemies(&state.world),
        projectiles: count::<Projectile>(&state.world),
        particles: count::<Particle>(&state.world),
        player_position: state.player.position,
    }
}

/// Enemies killed this frame are despawned on the next enemy pass; they no
/// longer count.
fn living_enemies(world: &World) -> u32 {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.health > 0.0)
        .count() as u32
}

fn count<C: hecs::Component>(world: &World) -> u32 {
    world.query::<&C>().iter().count() as u32
}

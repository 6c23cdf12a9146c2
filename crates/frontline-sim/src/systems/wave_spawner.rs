//! Wave spawning system: starts the next wave once the arena is clear.

use glam::Vec3;
use hecs::World;

use frontline_ai::profiles::WaveProfile;
use frontline_core::components::Enemy;
use frontline_core::constants::{WAVE_CLEAR_BONUS, WAVE_SPAWN_RADIUS};
use frontline_core::events::AudioCue;

use crate::game_state::{FrameEvents, GameState, WaveState};
use crate::scene::SceneGraph;
use crate::world_setup;

/// Spawn every enemy of wave `wave` on a circle around the origin.
/// Returns the number spawned.
pub fn start_wave(world: &mut World, scene: &mut SceneGraph, wave: u32) -> u32 {
    let profile = WaveProfile::for_wave(wave);
    for i in 0..profile.enemy_count {
        let angle = profile.spawn_angle(i);
        let position = Vec3::new(
            angle.cos() * WAVE_SPAWN_RADIUS,
            0.0,
            angle.sin() * WAVE_SPAWN_RADIUS,
        );
        world_setup::spawn_enemy(world, scene, &profile, position);
    }
    tracing::debug!(wave, enemies = profile.enemy_count, "wave spawned");
    profile.enemy_count
}

/// If no enemy is left, award the clear bonus and start the next wave.
pub fn run(state: &mut GameState, scene: &mut SceneGraph, events: &mut FrameEvents) {
    let WaveState::InProgress(current) = state.wave else {
        return;
    };
    if state.world.query::<&Enemy>().iter().next().is_some() {
        return;
    }

    let next = current + 1;
    start_wave(&mut state.world, scene, next);
    state.wave = WaveState::InProgress(next);
    state.score += WAVE_CLEAR_BONUS;
    events.audio.push(AudioCue::WaveComplete);
    tracing::info!(cleared = current, next, score = state.score, "wave complete");
}

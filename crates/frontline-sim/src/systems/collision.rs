//! Collision resolution: naive pairwise distance checks.
//!
//! - player projectiles against enemies
//! - enemy projectiles against the player
//! - enemy bodies against the player (contact damage)

use glam::Vec3;
use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use frontline_core::components::{Enemy, Projectile, Transform};
use frontline_core::constants::*;
use frontline_core::enums::ProjectileOrigin;
use frontline_core::events::AudioCue;

use crate::game_state::{FrameEvents, GameState};
use crate::scene::SceneGraph;
use crate::systems::{cleanup, particles};

/// Two points collide when closer than twice the radius.
pub fn collides(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius * COLLISION_RADIUS_SCALE
}

pub fn run(
    state: &mut GameState,
    scene: &mut SceneGraph,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
    despawn_buffer: &mut Vec<Entity>,
    dt: f32,
) {
    despawn_buffer.clear();

    let enemies: Vec<(Entity, Vec3)> = state
        .world
        .query::<(&Transform, &Enemy)>()
        .iter()
        .map(|(entity, (transform, _))| (entity, transform.position))
        .collect();
    let projectiles: Vec<(Entity, ProjectileOrigin, Vec3, f32)> = state
        .world
        .query::<(&Transform, &Projectile)>()
        .iter()
        .map(|(entity, (transform, p))| (entity, p.origin, transform.position, p.damage))
        .collect();

    let mut impacts = Vec::new();

    for (projectile, origin, position, damage) in projectiles {
        match origin {
            ProjectileOrigin::Player => {
                for &(target, target_pos) in &enemies {
                    if !collides(position, target_pos, PROJECTILE_HIT_RADIUS) {
                        continue;
                    }
                    let Ok(mut enemy) = state.world.get::<&mut Enemy>(target) else {
                        continue;
                    };
                    // Killed earlier this frame; removal happens on the next enemy pass.
                    if enemy.health <= 0.0 {
                        continue;
                    }
                    enemy.health -= damage;
                    state.score += HIT_SCORE;
                    impacts.push(position);
                    events.audio.push(AudioCue::Hit);
                    despawn_buffer.push(projectile);
                    break;
                }
            }
            ProjectileOrigin::Enemy => {
                if state.player.is_alive()
                    && collides(position, state.player.position, PROJECTILE_HIT_RADIUS)
                {
                    state.player.take_damage(damage);
                    events.damage_flash = true;
                    despawn_buffer.push(projectile);
                }
            }
        }
    }

    for (_entity, (transform, enemy)) in state.world.query_mut::<(&Transform, &Enemy)>() {
        if enemy.health > 0.0 && collides(transform.position, state.player.position, CONTACT_RADIUS) {
            state.player.take_damage(enemy.damage * dt);
            events.damage_flash = true;
        }
    }

    cleanup::despawn_buffered(&mut state.world, scene, despawn_buffer);

    for position in impacts {
        particles::spawn_impact(&mut state.world, scene, rng, position);
    }
}

//! Enemy update: remove the dead, track the player, fire when ready.

use glam::Vec3;
use hecs::{Entity, World};

use frontline_ai::fsm::{self, EnemyContext};
use frontline_core::components::{Enemy, Transform, Visual};
use frontline_core::constants::ENEMY_ATTACK_RANGE;
use frontline_core::enums::ProjectileOrigin;
use frontline_core::events::AudioCue;

use crate::game_state::{FrameEvents, Player};
use crate::scene::SceneGraph;
use crate::systems::cleanup;
use crate::world_setup;

pub fn run(
    world: &mut World,
    scene: &mut SceneGraph,
    player: &Player,
    events: &mut FrameEvents,
    despawn_buffer: &mut Vec<Entity>,
    dt: f32,
) {
    despawn_buffer.clear();
    let mut shots: Vec<(Vec3, Vec3, f32)> = Vec::new();

    for (entity, (transform, enemy, visual)) in
        world.query_mut::<(&mut Transform, &mut Enemy, &Visual)>()
    {
        if enemy.health <= 0.0 {
            despawn_buffer.push(entity);
            continue;
        }

        let decision = fsm::evaluate(&EnemyContext {
            position: transform.position,
            player_position: player.position,
            player_alive: player.is_alive(),
            attack_range: ENEMY_ATTACK_RANGE,
            attack_cooldown_secs: enemy.attack_cooldown_secs,
            cooldown_remaining: enemy.cooldown_remaining,
            dt,
        });

        transform.yaw = decision.yaw;
        enemy.cooldown_remaining = decision.cooldown_remaining;
        scene.set_transform(visual.node, transform.position, transform.yaw);

        if let Some(direction) = decision.fire_direction {
            shots.push((transform.position, direction, enemy.damage));
        }
    }

    cleanup::despawn_buffered(world, scene, despawn_buffer);

    for (origin, direction, damage) in shots {
        world_setup::spawn_projectile(
            world,
            scene,
            ProjectileOrigin::Enemy,
            origin,
            direction,
            damage,
        );
        events.audio.push(AudioCue::EnemyFire);
    }
}

//! Player movement, jumping and firing.

use glam::{Quat, Vec3};

use frontline_core::constants::*;
use frontline_core::enums::ProjectileOrigin;
use frontline_core::types::Camera;

use crate::game_state::GameState;
use crate::input::{InputState, KEY_FIRE, KEY_JUMP};
use crate::scene::SceneGraph;
use crate::world_setup;

pub fn run(
    state: &mut GameState,
    scene: &mut SceneGraph,
    input: &InputState,
    camera: &Camera,
    dt: f32,
) {
    let player = &mut state.player;

    // Horizontal movement relative to the look yaw.
    let local = input.movement_vector();
    let heading = Quat::from_rotation_y(input.yaw()) * Vec3::new(local.x, 0.0, local.z);
    if let Some(dir) = heading.try_normalize() {
        player.position += dir * PLAYER_SPEED * dt;
    }

    if input.is_down(KEY_JUMP) && player.grounded {
        player.vertical_velocity = PLAYER_JUMP_SPEED;
        player.grounded = false;
    }
    if !player.grounded {
        player.vertical_velocity -= PLAYER_GRAVITY * dt;
        player.position.y += player.vertical_velocity * dt;
        if player.position.y <= 0.0 {
            player.position.y = 0.0;
            player.vertical_velocity = 0.0;
            player.grounded = true;
        }
    }

    player.position.x = player.position.x.clamp(-PLAYER_BOUND, PLAYER_BOUND);
    player.position.z = player.position.z.clamp(-PLAYER_BOUND, PLAYER_BOUND);

    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);
    if input.is_down(KEY_FIRE) && player.try_fire() {
        let direction = camera.look_direction();
        let damage = player.projectile_damage;
        world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            camera.position + direction * MUZZLE_OFFSET,
            direction,
            damage,
        );
    }
}

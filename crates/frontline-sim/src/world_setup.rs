//! Entity spawn factories for setting up the arena.
//!
//! Every factory attaches a scene node first and stores it in the entity's
//! `Visual`, so an entity never exists without a live node.

use glam::Vec3;
use hecs::{Entity, World};

use frontline_ai::profiles::WaveProfile;
use frontline_core::components::*;
use frontline_core::constants::*;
use frontline_core::enums::{ProjectileOrigin, VisualKind};

use crate::assets::Assets;
use crate::scene::SceneGraph;

/// Add the static arena: skybox, terrain and the four boundary walls.
pub fn build_arena(scene: &mut SceneGraph, assets: &Assets) {
    scene.attach(VisualKind::Skybox, Vec3::ZERO);
    scene.attach(
        VisualKind::Terrain {
            texture: assets.ground_texture,
        },
        Vec3::ZERO,
    );

    let y = WALL_HEIGHT / 2.0;
    let e = ARENA_HALF_EXTENT;
    for (position, yaw) in [
        (Vec3::new(0.0, y, -e), 0.0),
        (Vec3::new(0.0, y, e), 0.0),
        (Vec3::new(-e, y, 0.0), std::f32::consts::FRAC_PI_2),
        (Vec3::new(e, y, 0.0), std::f32::consts::FRAC_PI_2),
    ] {
        let node = scene.attach(VisualKind::Wall, position);
        scene.set_transform(node, position, yaw);
    }
}

/// Spawn one enemy with the stats of `profile`.
pub fn spawn_enemy(
    world: &mut World,
    scene: &mut SceneGraph,
    profile: &WaveProfile,
    position: Vec3,
) -> Entity {
    let node = scene.attach(VisualKind::Enemy, position);
    world.spawn((
        Transform { position, yaw: 0.0 },
        Enemy {
            health: profile.health,
            max_health: profile.health,
            speed: profile.speed,
            damage: profile.damage,
            attack_cooldown_secs: profile.attack_cooldown_secs,
            cooldown_remaining: 0.0,
        },
        Visual { node },
    ))
}

/// Spawn a projectile travelling along `direction` (normalized here).
pub fn spawn_projectile(
    world: &mut World,
    scene: &mut SceneGraph,
    origin: ProjectileOrigin,
    position: Vec3,
    direction: Vec3,
    damage: f32,
) -> Entity {
    let speed = match origin {
        ProjectileOrigin::Player => PLAYER_PROJECTILE_SPEED,
        ProjectileOrigin::Enemy => ENEMY_PROJECTILE_SPEED,
    };
    let node = scene.attach(VisualKind::Projectile(origin), position);
    world.spawn((
        Transform { position, yaw: 0.0 },
        Projectile {
            origin,
            direction: direction.normalize_or_zero(),
            speed,
            damage,
            lifetime: PROJECTILE_LIFETIME,
        },
        Visual { node },
    ))
}

pub fn spawn_particle(
    world: &mut World,
    scene: &mut SceneGraph,
    position: Vec3,
    velocity: Vec3,
    lifetime: f32,
    color: u32,
) -> Entity {
    let node = scene.attach(VisualKind::Particle { color }, position);
    world.spawn((
        Transform { position, yaw: 0.0 },
        Particle {
            velocity,
            lifetime,
            max_lifetime: lifetime,
        },
        Visual { node },
    ))
}

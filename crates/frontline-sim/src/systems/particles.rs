//! Transient particles: impact bursts that fade out.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use frontline_core::components::{Particle, Transform, Visual};
use frontline_core::constants::*;

use crate::scene::SceneGraph;
use crate::systems::cleanup;
use crate::world_setup;

/// Age every particle; fade or remove it.
pub fn run(world: &mut World, scene: &mut SceneGraph, despawn_buffer: &mut Vec<Entity>, dt: f32) {
    despawn_buffer.clear();

    for (entity, (transform, particle, visual)) in
        world.query_mut::<(&mut Transform, &mut Particle, &Visual)>()
    {
        transform.position += particle.velocity * dt;
        particle.lifetime -= dt;

        if particle.lifetime <= 0.0 {
            despawn_buffer.push(entity);
        } else {
            scene.set_transform(visual.node, transform.position, transform.yaw);
            scene.set_opacity(visual.node, particle.lifetime / particle.max_lifetime);
        }
    }

    cleanup::despawn_buffered(world, scene, despawn_buffer);
}

/// Burst of sparks where a projectile hit.
pub fn spawn_impact(world: &mut World, scene: &mut SceneGraph, rng: &mut ChaCha8Rng, position: Vec3) {
    for _ in 0..IMPACT_PARTICLE_COUNT {
        let velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * IMPACT_SPREAD,
            rng.gen::<f32>() * IMPACT_LIFT,
            (rng.gen::<f32>() - 0.5) * IMPACT_SPREAD,
        );
        world_setup::spawn_particle(
            world,
            scene,
            position,
            velocity,
            IMPACT_PARTICLE_LIFETIME,
            IMPACT_PARTICLE_COLOR,
        );
    }
}

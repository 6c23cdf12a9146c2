//! Projectile integration and expiry.

use hecs::{Entity, World};

use frontline_core::components::{Projectile, Transform, Visual};
use frontline_core::constants::PROJECTILE_MAX_DISTANCE;

use crate::scene::SceneGraph;
use crate::systems::cleanup;

/// Move every projectile and remove the expired or escaped ones.
pub fn run(world: &mut World, scene: &mut SceneGraph, despawn_buffer: &mut Vec<Entity>, dt: f32) {
    despawn_buffer.clear();

    for (entity, (transform, projectile, visual)) in
        world.query_mut::<(&mut Transform, &mut Projectile, &Visual)>()
    {
        transform.position += projectile.direction * projectile.speed * dt;
        projectile.lifetime -= dt;

        if projectile.lifetime <= 0.0 || transform.position.length() > PROJECTILE_MAX_DISTANCE {
            despawn_buffer.push(entity);
        } else {
            scene.set_transform(visual.node, transform.position, transform.yaw);
        }
    }

    cleanup::despawn_buffered(world, scene, despawn_buffer);
}

//! Cleanup: detach visuals and despawn buffered entities.

use hecs::{Entity, World};

use frontline_core::components::Visual;

use crate::scene::SceneGraph;

/// Despawn every entity in `despawn_buffer`, detaching its scene node first.
/// Entities already gone are skipped.
pub fn despawn_buffered(world: &mut World, scene: &mut SceneGraph, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let node = world.get::<&Visual>(entity).ok().map(|visual| visual.node);
        if let Some(node) = node {
            scene.detach(node);
        }
        let _ = world.despawn(entity);
    }
}

/// Despawn every entity that carries a visual. Used on restart.
pub fn despawn_all(world: &mut World, scene: &mut SceneGraph, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, _visual) in world.query_mut::<&Visual>() {
        despawn_buffer.push(entity);
    }
    despawn_buffered(world, scene, despawn_buffer);
}

//! Delayed-removal system.
//!
//! Runs last in the pipeline: every other system gets to act on an
//! entity's final state before destruction lands. Marked entities count
//! their delay down each tick and are despawned once it reaches zero —
//! the same tick for zero-delay marks, later for delayed ones (which
//! keep being simulated and rendered until then, e.g. death explosions).

use umbra_core::types::EntityId;

use crate::ecs::world::{ComponentKind, World};

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<EntityId>, dt: f32) {
    despawn_buffer.clear();

    for id in world.query(ComponentKind::REMOVE, ComponentKind::empty()) {
        if let Some(remove) = &mut world.removes[id.index as usize] {
            remove.delay -= dt;
            if remove.delay <= 0.0 {
                despawn_buffer.push(id);
            }
        }
    }

    for id in despawn_buffer.drain(..) {
        world.despawn(id);
    }
}

//! Kinematic integration system.
//!
//! Updates Transform from Move each tick: position += velocity * dt.
//! Movement is unconditional; boundary and overlap effects belong to
//! downstream systems. The caller bounds integration error by clamping
//! dt to `MAX_DELTA_TIME` before the tick.

use crate::ecs::world::{ComponentKind, World};

pub fn run(world: &mut World, dt: f32) {
    for id in world.query(
        ComponentKind::TRANSFORM | ComponentKind::MOVE,
        ComponentKind::empty(),
    ) {
        let idx = id.index as usize;
        let velocity = match &world.moves[idx] {
            Some(movement) => movement.velocity,
            None => continue,
        };
        if let Some(transform) = &mut world.transforms[idx] {
            transform.position.x += velocity.x * dt;
            transform.position.y += velocity.y * dt;
        }
    }
}

//! Animation system.
//!
//! Resolves each entity's atlas region for the frame: player ships bank
//! according to their facing, everything else follows its looping
//! animation. Runs after gameplay systems so the regions reflect this
//! tick's state; purely presentational.

use umbra_core::enums::FacingDirection;

use crate::ecs::world::{ComponentKind, World};

const SHIP_BASE: &str = "ship_base";
const SHIP_LEFT: &str = "ship_left";
const SHIP_RIGHT: &str = "ship_right";

pub fn run(world: &mut World, dt: f32) {
    // Ship banking. An entity that also carries an Animation (the death
    // explosion) gets overridden by the pass below.
    for id in world.query(
        ComponentKind::PLAYER | ComponentKind::FACING | ComponentKind::GRAPHIC,
        ComponentKind::empty(),
    ) {
        let region = match world.expect_facing(id).direction {
            FacingDirection::Left => SHIP_LEFT,
            FacingDirection::Right => SHIP_RIGHT,
            FacingDirection::Default => SHIP_BASE,
        };
        if let Some(graphic) = &mut world.graphics[id.index as usize] {
            graphic.region = Some(region);
        }
    }

    // Looping animations.
    for id in world.query(
        ComponentKind::ANIMATION | ComponentKind::GRAPHIC,
        ComponentKind::empty(),
    ) {
        let idx = id.index as usize;
        let region = match &mut world.animations[idx] {
            Some(animation) => {
                animation.state_time += dt;
                animation.kind.region()
            }
            None => continue,
        };
        if let Some(graphic) = &mut world.graphics[idx] {
            graphic.region = Some(region);
        }
    }
}

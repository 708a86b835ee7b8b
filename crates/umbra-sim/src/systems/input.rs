//! Player input system.
//!
//! Resolves the pointer (or accelerometer) into a facing for each player,
//! fires lasers while the touch is held, and paces obstacle spawns off
//! the same trigger. Also culls lasers that left the top of the world —
//! a cheap cleanup colocated with the input tick rather than a separate
//! bounds system.

use rand_chacha::ChaCha8Rng;

use umbra_core::constants::{
    OBSTACLE_SPAWN_INTERVAL, PROJECTILE_CEILING_Y, TILT_TOLERANCE, TOUCH_TOLERANCE,
};
use umbra_core::enums::FacingDirection;
use umbra_core::types::InputSnapshot;

use crate::ecs::world::{ComponentKind, World};
use crate::world_setup;

/// Countdown timers owned by the input system, decremented every tick
/// regardless of input state. Both start expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireControl {
    /// Seconds until the next laser may fire.
    pub reload_timer: f32,
    /// Seconds until the next obstacle may spawn.
    pub obstacle_timer: f32,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    input: &InputSnapshot,
    fire: &mut FireControl,
    fire_rate: f32,
    world_width: u32,
    dt: f32,
) {
    cull_projectiles(world);

    fire.reload_timer -= dt;
    fire.obstacle_timer -= dt;

    for id in world.query(
        ComponentKind::PLAYER | ComponentKind::TRANSFORM | ComponentKind::FACING,
        ComponentKind::empty(),
    ) {
        let transform = *world.expect_transform(id);

        // Offset between the pointer and the ship center decides the bank.
        let diff_x = input.pointer_x - transform.position.x - transform.size.x * 0.5;
        let mut direction = if diff_x < -TOUCH_TOLERANCE {
            FacingDirection::Left
        } else if diff_x > TOUCH_TOLERANCE {
            FacingDirection::Right
        } else {
            FacingDirection::Default
        };

        // Tilt, when available, overrides the pointer. Positive tilt
        // leans the device left.
        if let Some(tilt) = input.tilt {
            direction = if tilt > TILT_TOLERANCE {
                FacingDirection::Left
            } else if tilt < -TILT_TOLERANCE {
                FacingDirection::Right
            } else {
                FacingDirection::Default
            };
        }
        world.expect_facing_mut(id).direction = direction;

        if input.touch_held && fire.reload_timer <= 0.0 {
            fire.reload_timer = 1.0 / fire_rate;
            world_setup::spawn_laser(world, &transform);
            if fire.obstacle_timer <= 0.0 {
                fire.obstacle_timer = OBSTACLE_SPAWN_INTERVAL;
                world_setup::spawn_obstacle(world, rng, world_width);
                log::debug!("obstacle spawned");
            }
        }
    }
}

/// Mark lasers past the top boundary and obstacles fully below the floor
/// for instant removal.
fn cull_projectiles(world: &mut World) {
    for id in world.query(ComponentKind::PROJECTILE, ComponentKind::REMOVE) {
        if world.expect_transform(id).position.y >= PROJECTILE_CEILING_Y {
            world.mark_for_removal(id, 0.0);
        }
    }
    for id in world.query(ComponentKind::OBSTACLE, ComponentKind::REMOVE) {
        let transform = world.expect_transform(id);
        if transform.position.y <= -transform.size.y {
            world.mark_for_removal(id, 0.0);
        }
    }
}

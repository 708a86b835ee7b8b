//! Entity spawn factories.
//!
//! Each factory attaches the entity's full component bundle before
//! returning, so systems never observe a partially configured entity.
//! Scene seeding (the player ship and the hazard band) is the embedding
//! application's responsibility; it calls these on scene entry.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use umbra_core::components::{
    Animation, Facing, Graphic, Move, Obstacle, Player, PowerUp, Projectile, Transform,
};
use umbra_core::constants::{
    DAMAGE_AREA_HEIGHT, LASER_SPEED, OBSTACLE_FALL_SPEED, PLAYER_START_X, PLAYER_START_Y,
    POWER_UP_FALL_SPEED, WORLD_HEIGHT,
};
use umbra_core::enums::{AnimationKind, PowerUpKind};
use umbra_core::types::EntityId;

use crate::ecs::world::World;

/// Spawn the player ship at its start position.
pub fn spawn_player(world: &mut World) -> EntityId {
    let id = world.spawn();
    let idx = id.index as usize;
    world.transforms[idx] = Some(Transform {
        position: Vec3::new(PLAYER_START_X, PLAYER_START_Y, 0.0),
        ..Default::default()
    });
    world.moves[idx] = Some(Move::default());
    world.graphics[idx] = Some(Graphic::default());
    world.players[idx] = Some(Player::default());
    world.facings[idx] = Some(Facing::default());
    id
}

/// Spawn the hazard band covering the bottom of the world.
pub fn spawn_hazard_band(world: &mut World, world_width: u32) -> EntityId {
    let id = world.spawn();
    let idx = id.index as usize;
    world.transforms[idx] = Some(Transform {
        size: Vec2::new(world_width as f32, DAMAGE_AREA_HEIGHT),
        ..Default::default()
    });
    world.animations[idx] = Some(Animation::new(AnimationKind::HazardBand));
    world.graphics[idx] = Some(Graphic::default());
    id
}

/// Spawn a laser bolt from the muzzle of the given ship transform.
pub fn spawn_laser(world: &mut World, muzzle: &Transform) -> EntityId {
    let size = Vec2::new(0.25, 0.75);
    let id = world.spawn();
    let idx = id.index as usize;
    world.transforms[idx] = Some(Transform {
        position: Vec3::new(
            muzzle.position.x + (muzzle.size.x - size.x) * 0.5,
            muzzle.position.y + muzzle.size.y,
            muzzle.position.z,
        ),
        size,
        rotation_deg: 0.0,
    });
    world.moves[idx] = Some(Move {
        velocity: Vec2::new(0.0, LASER_SPEED),
    });
    world.projectiles[idx] = Some(Projectile);
    world.animations[idx] = Some(Animation::new(AnimationKind::Laser));
    world.graphics[idx] = Some(Graphic::default());
    id
}

/// Spawn a falling obstacle in a random column at the top of the world.
pub fn spawn_obstacle(world: &mut World, rng: &mut ChaCha8Rng, world_width: u32) -> EntityId {
    let x = rng.gen_range(0..world_width) as f32;
    let id = world.spawn();
    let idx = id.index as usize;
    world.transforms[idx] = Some(Transform {
        position: Vec3::new(x, WORLD_HEIGHT, 0.0),
        ..Default::default()
    });
    world.moves[idx] = Some(Move {
        velocity: Vec2::new(0.0, OBSTACLE_FALL_SPEED),
    });
    world.obstacles[idx] = Some(Obstacle);
    world.animations[idx] = Some(Animation::new(AnimationKind::Obstacle));
    world.graphics[idx] = Some(Graphic::default());
    id
}

/// Spawn a falling power-up. The `None` sentinel has no visual and spawns
/// nothing; callers popping pattern slots can pass it straight through.
pub fn spawn_power_up(world: &mut World, kind: PowerUpKind, x: f32, y: f32) -> Option<EntityId> {
    let animation = kind.animation()?;
    let id = world.spawn();
    let idx = id.index as usize;
    world.transforms[idx] = Some(Transform {
        position: Vec3::new(x, y, 0.0),
        ..Default::default()
    });
    world.power_ups[idx] = Some(PowerUp { kind });
    world.animations[idx] = Some(Animation::new(animation));
    world.graphics[idx] = Some(Graphic::default());
    world.moves[idx] = Some(Move {
        velocity: Vec2::new(0.0, POWER_UP_FALL_SPEED),
    });
    Some(id)
}

//! Power-up spawning and collection system.
//!
//! Spawning is global: a countdown reseeded from a random interval pops
//! slots off the current spawn pattern. Patterns come from a fixed
//! three-entry palette, so short-term spawns stay varied while the number
//! of consecutive pickups of one type stays bounded. Collection is
//! per-entity: missed pickups below the floor are culled, anything else
//! is tested for overlap against the live players.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use umbra_core::constants::{
    BOOST_1_SPEED_GAIN, BOOST_2_SPEED_GAIN, LIFE_GAIN, MAX_SPAWN_INTERVAL, MIN_SPAWN_INTERVAL,
    MISSED_PICKUP_Y, POWER_UP_SPAWN_Y, SHIELD_GAIN,
};
use umbra_core::enums::PowerUpKind;
use umbra_core::events::{EventBus, GameEvent};
use umbra_core::types::{EntityId, Rect};

use crate::ecs::world::{ComponentKind, World};
use crate::world_setup;

use PowerUpKind::{Life, Shield, Speed1, Speed2};

/// The spawn pattern palette. Each pattern is five ordered slots; empty
/// slots skip a spawn cycle.
const SPAWN_PATTERNS: [[PowerUpKind; 5]; 3] = [
    [Speed1, Speed2, PowerUpKind::None, PowerUpKind::None, Life],
    [PowerUpKind::None, Life, Shield, Speed2, PowerUpKind::None],
    [Shield, PowerUpKind::None, Speed2, PowerUpKind::None, Speed1],
];

/// Spawner state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct PowerUpSpawner {
    /// Seconds until the next spawn cycle. Starts expired.
    pub spawn_time: f32,
    /// Remaining slots of the current pattern, consumed front to back.
    pub queue: VecDeque<PowerUpKind>,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut PowerUpSpawner,
    events: &mut EventBus,
    world_width: u32,
    dt: f32,
) {
    tick_spawner(world, rng, spawner, world_width, dt);
    collect(world, events);
}

fn tick_spawner(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut PowerUpSpawner,
    world_width: u32,
    dt: f32,
) {
    spawner.spawn_time -= dt;
    if spawner.spawn_time > 0.0 {
        return;
    }
    spawner.spawn_time = rng.gen_range(MIN_SPAWN_INTERVAL..MAX_SPAWN_INTERVAL);

    if spawner.queue.is_empty() {
        let pattern = SPAWN_PATTERNS[rng.gen_range(0..SPAWN_PATTERNS.len())];
        spawner.queue.extend(pattern);
        log::debug!("next spawn pattern: {:?}", spawner.queue);
    }

    let Some(kind) = spawner.queue.pop_front() else {
        return;
    };
    // A None slot spawns nothing this cycle; spawn_power_up skips it.
    let x = rng.gen_range(0..world_width) as f32;
    world_setup::spawn_power_up(world, kind, x, POWER_UP_SPAWN_Y);
}

fn collect(world: &mut World, events: &mut EventBus) {
    let players = world.query(ComponentKind::PLAYER, ComponentKind::REMOVE);

    for id in world.query(
        ComponentKind::POWER_UP | ComponentKind::TRANSFORM,
        ComponentKind::REMOVE,
    ) {
        let transform = world.expect_transform(id);
        if transform.position.y <= MISSED_PICKUP_Y {
            // Missed pickup: culled without effect or event.
            world.mark_for_removal(id, 0.0);
            continue;
        }

        let bounds = Rect::from_transform(transform);
        for &player_id in &players {
            let overlaps = world
                .transform(player_id)
                .is_some_and(|player_transform| {
                    Rect::from_transform(player_transform).overlaps(&bounds)
                });
            if overlaps {
                // First player in query order wins the pickup; the
                // power-up collects exactly once.
                collect_power_up(world, events, player_id, id);
                break;
            }
        }
    }
}

fn collect_power_up(world: &mut World, events: &mut EventBus, player_id: EntityId, id: EntityId) {
    let kind = world.expect_power_up(id).kind;
    log::debug!("player {player_id} collected power-up {kind:?}");

    match kind {
        Speed1 => {
            if let Some(movement) = world.movement_mut(player_id) {
                movement.velocity.y += BOOST_1_SPEED_GAIN;
            }
        }
        Speed2 => {
            if let Some(movement) = world.movement_mut(player_id) {
                movement.velocity.y += BOOST_2_SPEED_GAIN;
            }
        }
        Life => {
            if let Some(player) = world.player_mut(player_id) {
                player.life = player.max_life.min(player.life + LIFE_GAIN);
            }
        }
        Shield => {
            if let Some(player) = world.player_mut(player_id) {
                player.shield = player.max_shield.min(player.shield + SHIELD_GAIN);
            }
        }
        PowerUpKind::None => {
            log::error!("unsupported power-up kind {kind:?} on entity {id}");
        }
    }

    events.publish(&GameEvent::PowerUpCollected {
        player: player_id,
        kind,
    });
    world.mark_for_removal(id, 0.0);
}

//! Simulation engine — the core of the game.
//!
//! `Engine` owns the entity store, resolves the caller-supplied input
//! snapshot, runs all systems in a fixed order each tick, and produces
//! render snapshots. Single-threaded and frame-driven: one `update`
//! call per frame drives the whole pipeline synchronously.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use umbra_core::constants::{LASER_FIRE_RATE, WORLD_WIDTH};
use umbra_core::events::EventBus;
use umbra_core::types::{EntityId, InputSnapshot, SimTime};

use crate::ecs::world::World;
use crate::systems;
use crate::systems::input::FireControl;
use crate::systems::power_up::PowerUpSpawner;
use crate::systems::snapshot::RenderSnapshot;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Laser shots per second while firing.
    pub fire_rate: f32,
    /// World width in columns, for spawn positions.
    pub world_width: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fire_rate: LASER_FIRE_RATE,
            world_width: WORLD_WIDTH,
        }
    }
}

/// The simulation engine. Owns the world and all per-system state.
///
/// Scene seeding is the caller's job: on scene entry, spawn the player
/// ship and the hazard band through [`crate::world_setup`] against
/// [`Engine::world_mut`].
pub struct Engine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    events: EventBus,
    input: InputSnapshot,
    fire_control: FireControl,
    spawner: PowerUpSpawner,
    despawn_buffer: Vec<EntityId>,
    fire_rate: f32,
    world_width: u32,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: EventBus::new(),
            input: InputSnapshot::default(),
            fire_control: FireControl::default(),
            spawner: PowerUpSpawner::default(),
            despawn_buffer: Vec::new(),
            fire_rate: config.fire_rate,
            world_width: config.world_width,
        }
    }

    /// Store the input collaborator's reading for the coming ticks.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Advance the simulation by one tick of `dt` seconds.
    ///
    /// The caller clamps `dt` to
    /// [`MAX_DELTA_TIME`](umbra_core::constants::MAX_DELTA_TIME) so one
    /// slow frame cannot cause unbounded integration or damage.
    pub fn update(&mut self, dt: f32) {
        systems::input::run(
            &mut self.world,
            &mut self.rng,
            &self.input,
            &mut self.fire_control,
            self.fire_rate,
            self.world_width,
            dt,
        );
        systems::movement::run(&mut self.world, dt);
        systems::damage::run(&mut self.world, dt);
        systems::power_up::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &mut self.events,
            self.world_width,
            dt,
        );
        systems::animation::run(&mut self.world, dt);
        // Removal runs last so every other system sees this tick's state
        // before destruction is finalized.
        systems::remove::run(&mut self.world, &mut self.despawn_buffer, dt);

        self.time.advance(dt);
    }

    /// Drawables for the current frame, for the render collaborator.
    pub fn render_snapshot(&self) -> RenderSnapshot {
        systems::snapshot::build_snapshot(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The event channel; subscribe here to observe collection events.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn time(&self) -> SimTime {
        self.time
    }
}

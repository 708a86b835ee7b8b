//! Simulation engine for umbra.
//!
//! Owns the entity store, runs the system pipeline in a fixed order each
//! tick, and produces render snapshots for the presentation layer.
//! Completely headless (no window, audio, or UI dependency), enabling
//! deterministic testing.

pub mod ecs;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use ecs::world::{ComponentKind, World};
pub use engine::{Engine, SimConfig};
pub use umbra_core as core;

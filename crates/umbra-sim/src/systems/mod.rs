//! Systems that operate on the world each tick, in pipeline order:
//! input, movement, damage, power-up, animation, removal.
//!
//! Systems are free functions over `&mut World`. Per-system state (fire
//! timers, the spawn pattern queue) lives on the engine and is passed in
//! by mutable reference. Later systems observe the effects of earlier
//! systems within the same tick.

pub mod animation;
pub mod damage;
pub mod input;
pub mod movement;
pub mod power_up;
pub mod remove;
pub mod snapshot;

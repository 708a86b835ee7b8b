//! Components attached to entities in the store.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LIFE, MAX_SHIELD};
use crate::enums::{AnimationKind, FacingDirection, PowerUpKind};

/// Spatial state: position, size, rotation.
///
/// `position.z` is unused by gameplay and reserved for draw ordering.
/// Size components are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub size: Vec2,
    pub rotation_deg: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec2::ONE,
            rotation_deg: 0.0,
        }
    }
}

/// 2D velocity, integrated into the transform by the movement system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub velocity: Vec2,
}

/// Current facing of the ship, rewritten from input every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facing {
    pub direction: FacingDirection,
}

/// Player stats. Both stats stay within `0..=max` at every mutation site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub life: f32,
    pub max_life: f32,
    pub shield: f32,
    pub max_shield: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            life: MAX_LIFE,
            max_life: MAX_LIFE,
            shield: 0.0,
            max_shield: MAX_SHIELD,
        }
    }
}

/// Pickup payload carried by a falling power-up entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Marks an entity as a player laser bolt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an entity as a falling obstacle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Obstacle;

/// Links an entity to a named looping animation. `state_time` accumulates
/// so the render collaborator can pick the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    pub state_time: f32,
}

impl Animation {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            state_time: 0.0,
        }
    }
}

/// Resolved atlas region for an entity, written by the animation system
/// and read by the render snapshot. `None` until first resolved.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Graphic {
    pub region: Option<&'static str>,
}

/// Schedules the owning entity for destruction once `delay` reaches zero.
///
/// Attaching this marker is the only sanctioned way to destroy an entity.
/// The delay only counts down; re-marking an already marked entity does
/// not reset it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Remove {
    pub delay: f32,
}

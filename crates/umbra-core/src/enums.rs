//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Horizontal facing of the player ship, derived from input each tick.
/// Purely presentational: consumed by the animation system to pick the
/// banking sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    Left,
    Right,
    /// Flying straight, no bank.
    #[default]
    Default,
}

/// Power-up palette. `None` is a pattern-slot sentinel meaning "no spawn
/// this cycle" and is never attached to a live entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Small vertical speed boost.
    Speed1,
    /// Large vertical speed boost.
    Speed2,
    /// Life restore, clamped to the player's maximum.
    Life,
    /// Shield charge, clamped to the player's maximum.
    Shield,
    #[default]
    None,
}

impl PowerUpKind {
    /// Visual used for the falling pickup. The `None` sentinel has no
    /// visual because it never reaches a live entity.
    pub fn animation(self) -> Option<AnimationKind> {
        match self {
            PowerUpKind::Speed1 => Some(AnimationKind::Speed1),
            PowerUpKind::Speed2 => Some(AnimationKind::Speed2),
            PowerUpKind::Life => Some(AnimationKind::Life),
            PowerUpKind::Shield => Some(AnimationKind::Shield),
            PowerUpKind::None => None,
        }
    }
}

/// Named looping animations known to the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    /// The hazard band at the bottom of the world.
    HazardBand,
    Speed1,
    Speed2,
    Life,
    Shield,
    /// Death explosion played out during the removal delay.
    Explosion,
    /// Player laser bolt.
    Laser,
    /// Falling obstacle.
    Obstacle,
}

impl AnimationKind {
    /// Atlas region name for this animation.
    pub fn region(self) -> &'static str {
        match self {
            AnimationKind::HazardBand => "hazard_band",
            AnimationKind::Speed1 => "orb_speed_1",
            AnimationKind::Speed2 => "orb_speed_2",
            AnimationKind::Life => "orb_life",
            AnimationKind::Shield => "orb_shield",
            AnimationKind::Explosion => "explosion",
            AnimationKind::Laser => "laser",
            AnimationKind::Obstacle => "meteor",
        }
    }
}

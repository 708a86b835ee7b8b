//! Render snapshot builder.
//!
//! The core does not rasterize: each frame it hands the render
//! collaborator an ordered list of (region, transform) pairs and nothing
//! else. Serializable so determinism tests can compare whole frames.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::ecs::world::{ComponentKind, World};

/// One drawable quad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteInstance {
    /// Atlas region to draw.
    pub region: &'static str,
    pub position: Vec3,
    pub size: Vec2,
    pub rotation_deg: f32,
    /// Seconds the entity's animation has been playing, for frame
    /// selection by the renderer.
    pub state_time: f32,
}

/// All drawables for one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub sprites: Vec<SpriteInstance>,
}

/// Collect every entity with a resolved graphic, ordered by z with
/// entity index as the tie-break.
pub fn build_snapshot(world: &World) -> RenderSnapshot {
    let mut sprites = Vec::new();

    for id in world.query(
        ComponentKind::GRAPHIC | ComponentKind::TRANSFORM,
        ComponentKind::empty(),
    ) {
        let idx = id.index as usize;
        let region = match &world.graphics[idx] {
            // Unresolved graphics (before the first animation pass) are
            // not drawn.
            Some(graphic) => match graphic.region {
                Some(region) => region,
                None => continue,
            },
            None => continue,
        };
        let transform = world.expect_transform(id);
        let state_time = world.animations[idx]
            .as_ref()
            .map_or(0.0, |animation| animation.state_time);
        sprites.push(SpriteInstance {
            region,
            position: transform.position,
            size: transform.size,
            rotation_deg: transform.rotation_deg,
            state_time,
        });
    }

    // Query order is entity index order, so a stable sort on z keeps the
    // index tie-break.
    sprites.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
    RenderSnapshot { sprites }
}

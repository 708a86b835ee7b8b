//! Hazard band damage system.
//!
//! Players inside the band at the world floor take continuous damage.
//! The shield absorbs first; any remainder comes out of life. Both stats
//! are clamped at zero. A player whose life reaches zero is scheduled
//! for delayed removal so the death explosion can play out.

use umbra_core::components::Animation;
use umbra_core::constants::{DAMAGE_AREA_HEIGHT, DAMAGE_PER_SECOND, DEATH_EXPLOSION_DELAY};
use umbra_core::enums::AnimationKind;

use crate::ecs::world::{ComponentKind, World};

pub fn run(world: &mut World, dt: f32) {
    for id in world.query(
        ComponentKind::PLAYER | ComponentKind::TRANSFORM,
        ComponentKind::REMOVE,
    ) {
        if world.expect_transform(id).position.y > DAMAGE_AREA_HEIGHT {
            continue;
        }

        let mut damage = DAMAGE_PER_SECOND * dt;
        let player = world.expect_player_mut(id);

        if player.shield > 0.0 {
            let blocked = player.shield.min(damage);
            player.shield -= blocked;
            damage -= blocked;
            if damage <= 0.0 {
                // Entire hit absorbed by the shield.
                continue;
            }
        }

        player.life = (player.life - damage).max(0.0);
        if player.life <= 0.0 {
            world.animations[id.index as usize] = Some(Animation::new(AnimationKind::Explosion));
            world.mark_for_removal(id, DEATH_EXPLOSION_DELAY);
        }
    }
}

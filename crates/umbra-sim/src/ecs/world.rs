//! SoA (Struct of Arrays) entity store with mask-based queries.
//!
//! Each component type has its own `Vec<Option<T>>` storage, indexed by
//! entity index. An entity's capability mask is derived from which slots
//! are occupied, so queries are always consistent with storage.

use bitflags::bitflags;

use umbra_core::components::{
    Animation, Facing, Graphic, Move, Obstacle, Player, PowerUp, Projectile, Remove, Transform,
};
use umbra_core::types::EntityId;

use super::entity::EntityAllocator;

bitflags! {
    /// Component-presence bits used in require/exclude queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ComponentKind: u16 {
        const TRANSFORM = 1 << 0;
        const MOVE = 1 << 1;
        const FACING = 1 << 2;
        const PLAYER = 1 << 3;
        const POWER_UP = 1 << 4;
        const PROJECTILE = 1 << 5;
        const OBSTACLE = 1 << 6;
        const ANIMATION = 1 << 7;
        const GRAPHIC = 1 << 8;
        const REMOVE = 1 << 9;
    }
}

/// The entity store.
///
/// Spawning is atomic from the systems' point of view: factories attach a
/// full component bundle before any system runs again, so no partially
/// configured entity is ever visible to a query. Destruction goes through
/// [`World::mark_for_removal`]; only the removal system despawns, which
/// clears every component slot back to `None` and returns the index to
/// the free list.
pub struct World {
    allocator: EntityAllocator,
    alive: Vec<bool>,

    // Component storage, one Vec per component type.
    pub transforms: Vec<Option<Transform>>,
    pub moves: Vec<Option<Move>>,
    pub facings: Vec<Option<Facing>>,
    pub players: Vec<Option<Player>>,
    pub power_ups: Vec<Option<PowerUp>>,
    pub projectiles: Vec<Option<Projectile>>,
    pub obstacles: Vec<Option<Obstacle>>,
    pub animations: Vec<Option<Animation>>,
    pub graphics: Vec<Option<Graphic>>,
    pub removes: Vec<Option<Remove>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            alive: Vec::new(),
            transforms: Vec::new(),
            moves: Vec::new(),
            facings: Vec::new(),
            players: Vec::new(),
            power_ups: Vec::new(),
            projectiles: Vec::new(),
            obstacles: Vec::new(),
            animations: Vec::new(),
            graphics: Vec::new(),
            removes: Vec::new(),
        }
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = self.allocator.allocate();
        let idx = id.index as usize;

        // Grow all storage to accommodate.
        while self.alive.len() <= idx {
            self.alive.push(false);
            self.transforms.push(None);
            self.moves.push(None);
            self.facings.push(None);
            self.players.push(None);
            self.power_ups.push(None);
            self.projectiles.push(None);
            self.obstacles.push(None);
            self.animations.push(None);
            self.graphics.push(None);
            self.removes.push(None);
        }

        self.alive[idx] = true;
        id
    }

    /// Clear the entity's component slots and return its index to the
    /// pool. Internal: destruction is only sanctioned through the removal
    /// lifecycle, which calls this once the delay has elapsed.
    pub(crate) fn despawn(&mut self, id: EntityId) {
        if !self.allocator.is_alive(id) {
            return;
        }
        let idx = id.index as usize;
        self.alive[idx] = false;
        self.transforms[idx] = None;
        self.moves[idx] = None;
        self.facings[idx] = None;
        self.players[idx] = None;
        self.power_ups[idx] = None;
        self.projectiles[idx] = None;
        self.obstacles[idx] = None;
        self.animations[idx] = None;
        self.graphics[idx] = None;
        self.removes[idx] = None;
        self.allocator.deallocate(id);
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.allocator.is_alive(id)
            && (id.index as usize) < self.alive.len()
            && self.alive[id.index as usize]
    }

    pub fn entity_count(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// Capability mask of a live entity; empty for dead or stale handles.
    pub fn mask(&self, id: EntityId) -> ComponentKind {
        if self.is_alive(id) {
            self.mask_at(id.index as usize)
        } else {
            ComponentKind::empty()
        }
    }

    fn mask_at(&self, idx: usize) -> ComponentKind {
        let mut mask = ComponentKind::empty();
        if self.transforms[idx].is_some() {
            mask |= ComponentKind::TRANSFORM;
        }
        if self.moves[idx].is_some() {
            mask |= ComponentKind::MOVE;
        }
        if self.facings[idx].is_some() {
            mask |= ComponentKind::FACING;
        }
        if self.players[idx].is_some() {
            mask |= ComponentKind::PLAYER;
        }
        if self.power_ups[idx].is_some() {
            mask |= ComponentKind::POWER_UP;
        }
        if self.projectiles[idx].is_some() {
            mask |= ComponentKind::PROJECTILE;
        }
        if self.obstacles[idx].is_some() {
            mask |= ComponentKind::OBSTACLE;
        }
        if self.animations[idx].is_some() {
            mask |= ComponentKind::ANIMATION;
        }
        if self.graphics[idx].is_some() {
            mask |= ComponentKind::GRAPHIC;
        }
        if self.removes[idx].is_some() {
            mask |= ComponentKind::REMOVE;
        }
        mask
    }

    /// Live entities whose mask contains all of `require` and none of
    /// `exclude`, in index order.
    ///
    /// The list is materialized at call time. Systems re-query, so
    /// entities added by earlier systems in the tick are visible to later
    /// ones; entities spawned while a system walks its own list only
    /// appear once the list is rebuilt. Entities despawned mid-walk are
    /// skipped by the liveness checks in the accessors.
    pub fn query(&self, require: ComponentKind, exclude: ComponentKind) -> Vec<EntityId> {
        let mut matches = Vec::new();
        for idx in 0..self.alive.len() {
            if !self.alive[idx] {
                continue;
            }
            let mask = self.mask_at(idx);
            if mask.contains(require) && !mask.intersects(exclude) {
                if let Some(generation) = self.allocator.generation_of(idx as u32) {
                    matches.push(EntityId::new(idx as u32, generation));
                }
            }
        }
        matches
    }

    /// Schedule `id` for destruction after `delay` seconds. A zero delay
    /// destroys it at the end of the current tick. Re-marking an already
    /// marked entity is a no-op: the delay never resets.
    pub fn mark_for_removal(&mut self, id: EntityId, delay: f32) {
        if !self.is_alive(id) {
            return;
        }
        let idx = id.index as usize;
        if self.removes[idx].is_none() {
            self.removes[idx] = Some(Remove { delay });
        }
    }

    // --- Component accessors ---
    //
    // The `expect_` variants are for components a system's own query
    // already required: absence there is a composition bug and fails
    // fast, naming the entity and the missing component.

    pub fn transform(&self, id: EntityId) -> Option<&Transform> {
        if !self.is_alive(id) {
            return None;
        }
        self.transforms[id.index as usize].as_ref()
    }

    pub fn transform_mut(&mut self, id: EntityId) -> Option<&mut Transform> {
        if !self.is_alive(id) {
            return None;
        }
        self.transforms[id.index as usize].as_mut()
    }

    pub fn expect_transform(&self, id: EntityId) -> &Transform {
        match self.transform(id) {
            Some(transform) => transform,
            None => missing(id, "Transform"),
        }
    }

    pub fn movement_mut(&mut self, id: EntityId) -> Option<&mut Move> {
        if !self.is_alive(id) {
            return None;
        }
        self.moves[id.index as usize].as_mut()
    }

    pub fn expect_facing(&self, id: EntityId) -> &Facing {
        if self.is_alive(id) {
            if let Some(facing) = self.facings[id.index as usize].as_ref() {
                return facing;
            }
        }
        missing(id, "Facing")
    }

    pub fn expect_facing_mut(&mut self, id: EntityId) -> &mut Facing {
        if self.is_alive(id) {
            if let Some(facing) = self.facings[id.index as usize].as_mut() {
                return facing;
            }
        }
        missing(id, "Facing")
    }

    pub fn player_mut(&mut self, id: EntityId) -> Option<&mut Player> {
        if !self.is_alive(id) {
            return None;
        }
        self.players[id.index as usize].as_mut()
    }

    pub fn expect_player_mut(&mut self, id: EntityId) -> &mut Player {
        if self.is_alive(id) {
            if let Some(player) = self.players[id.index as usize].as_mut() {
                return player;
            }
        }
        missing(id, "Player")
    }

    pub fn expect_power_up(&self, id: EntityId) -> &PowerUp {
        if self.is_alive(id) {
            if let Some(power_up) = self.power_ups[id.index as usize].as_ref() {
                return power_up;
            }
        }
        missing(id, "PowerUp")
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(id: EntityId, component: &str) -> ! {
    panic!("entity {id} missing required {component} component");
}

#[cfg(test)]
mod tests {
    use umbra_core::components::{Move, Player, Transform};

    use super::*;

    #[test]
    fn spawn_and_despawn() {
        let mut world = World::new();
        let e = world.spawn();
        assert!(world.is_alive(e));
        assert_eq!(world.entity_count(), 1);

        world.despawn(e);
        assert!(!world.is_alive(e));
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn despawn_clears_component_storage() {
        let mut world = World::new();
        let e = world.spawn();
        let idx = e.index as usize;

        world.transforms[idx] = Some(Transform::default());
        world.moves[idx] = Some(Move::default());
        assert!(world.transforms[idx].is_some());

        world.despawn(e);
        assert!(world.transforms[idx].is_none());
        assert!(world.moves[idx].is_none());

        // The reused slot starts from a clean mask.
        let e_reuse = world.spawn();
        assert_eq!(e_reuse.index, e.index);
        assert_eq!(world.mask(e_reuse), ComponentKind::empty());
    }

    #[test]
    fn mask_tracks_storage() {
        let mut world = World::new();
        let e = world.spawn();
        let idx = e.index as usize;
        assert_eq!(world.mask(e), ComponentKind::empty());

        world.transforms[idx] = Some(Transform::default());
        world.players[idx] = Some(Player::default());
        assert_eq!(
            world.mask(e),
            ComponentKind::TRANSFORM | ComponentKind::PLAYER
        );
    }

    #[test]
    fn query_require_and_exclude() {
        let mut world = World::new();

        let plain = world.spawn();
        world.transforms[plain.index as usize] = Some(Transform::default());
        world.moves[plain.index as usize] = Some(Move::default());

        let marked = world.spawn();
        world.transforms[marked.index as usize] = Some(Transform::default());
        world.moves[marked.index as usize] = Some(Move::default());
        world.mark_for_removal(marked, 0.0);

        let no_move = world.spawn();
        world.transforms[no_move.index as usize] = Some(Transform::default());

        let moving = world.query(
            ComponentKind::TRANSFORM | ComponentKind::MOVE,
            ComponentKind::REMOVE,
        );
        assert_eq!(moving, vec![plain]);

        let all_transforms = world.query(ComponentKind::TRANSFORM, ComponentKind::empty());
        assert_eq!(all_transforms, vec![plain, marked, no_move]);
    }

    #[test]
    fn query_skips_dead_entities() {
        let mut world = World::new();
        let a = world.spawn();
        world.transforms[a.index as usize] = Some(Transform::default());
        let b = world.spawn();
        world.transforms[b.index as usize] = Some(Transform::default());

        world.despawn(a);
        let live = world.query(ComponentKind::TRANSFORM, ComponentKind::empty());
        assert_eq!(live, vec![b]);
    }

    #[test]
    fn mark_for_removal_never_resets() {
        let mut world = World::new();
        let e = world.spawn();
        world.mark_for_removal(e, 0.9);
        world.mark_for_removal(e, 5.0);
        assert_eq!(world.removes[e.index as usize].unwrap().delay, 0.9);
    }

    #[test]
    fn stale_handle_does_not_resolve() {
        let mut world = World::new();
        let e = world.spawn();
        world.transforms[e.index as usize] = Some(Transform::default());
        world.despawn(e);

        let reused = world.spawn();
        assert_eq!(reused.index, e.index);
        assert!(world.transform(e).is_none());
        assert_eq!(world.mask(e), ComponentKind::empty());
    }

    #[test]
    #[should_panic(expected = "missing required Transform")]
    fn expect_transform_panics_on_missing() {
        let mut world = World::new();
        let e = world.spawn();
        world.expect_transform(e);
    }
}

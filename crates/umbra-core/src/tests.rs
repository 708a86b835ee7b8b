#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::components::{Player, Transform};
    use crate::enums::{AnimationKind, FacingDirection, PowerUpKind};
    use crate::events::{EventBus, GameEvent};
    use crate::types::{EntityId, InputSnapshot, Rect, SimTime};

    /// Verify the shared enums round-trip through serde_json.
    #[test]
    fn test_power_up_kind_serde() {
        let variants = vec![
            PowerUpKind::Speed1,
            PowerUpKind::Speed2,
            PowerUpKind::Life,
            PowerUpKind::Shield,
            PowerUpKind::None,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerUpKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_facing_direction_serde() {
        let variants = vec![
            FacingDirection::Left,
            FacingDirection::Right,
            FacingDirection::Default,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FacingDirection = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_power_up_animation_mapping() {
        assert_eq!(
            PowerUpKind::Speed1.animation(),
            Some(AnimationKind::Speed1)
        );
        assert_eq!(PowerUpKind::Life.animation(), Some(AnimationKind::Life));
        assert_eq!(
            PowerUpKind::Shield.animation(),
            Some(AnimationKind::Shield)
        );
        // The sentinel has no visual: it must never reach a live entity.
        assert_eq!(PowerUpKind::None.animation(), None);
    }

    #[test]
    fn test_transform_defaults() {
        let transform = Transform::default();
        assert_eq!(transform.position.x, 0.0);
        assert_eq!(transform.position.y, 0.0);
        assert_eq!(transform.size.x, 1.0);
        assert_eq!(transform.size.y, 1.0);
        assert_eq!(transform.rotation_deg, 0.0);
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        assert_eq!(player.life, player.max_life);
        assert_eq!(player.shield, 0.0);
        assert!(player.max_shield > 0.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Contained rectangles overlap.
        let inner = Rect::new(0.5, 0.5, 0.5, 0.5);
        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let right = Rect::new(1.0, 0.0, 1.0, 1.0);
        let above = Rect::new(0.0, 1.0, 1.0, 1.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_rect_disjoint() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let far = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new(3, 1);
        assert_eq!(id.to_string(), "E3g1");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.05);
        time.advance(0.05);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_input_snapshot_defaults() {
        let input = InputSnapshot::default();
        assert!(!input.touch_held);
        assert_eq!(input.tilt, None);
    }

    #[test]
    fn test_event_bus_fan_out() {
        let mut bus = EventBus::new();
        let seen_a: Rc<RefCell<Vec<GameEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_b: Rc<RefCell<Vec<GameEvent>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen_a);
        bus.subscribe(move |event| sink.borrow_mut().push(*event));
        let sink = Rc::clone(&seen_b);
        bus.subscribe(move |event| sink.borrow_mut().push(*event));

        let event = GameEvent::PowerUpCollected {
            player: EntityId::new(0, 0),
            kind: PowerUpKind::Life,
        };
        bus.publish(&event);

        assert_eq!(seen_a.borrow().as_slice(), &[event]);
        assert_eq!(seen_b.borrow().as_slice(), &[event]);
    }
}

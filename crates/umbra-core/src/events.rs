//! Events emitted by the simulation for external collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::PowerUpKind;
use crate::types::EntityId;

/// Events published on the [`EventBus`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player collected a power-up.
    PowerUpCollected { player: EntityId, kind: PowerUpKind },
}

type Handler = Box<dyn FnMut(&GameEvent)>;

/// Synchronous fan-out channel between the simulation and its
/// collaborators (audio, UI score feedback).
///
/// The bus is an explicit mediator passed into the systems that publish,
/// never ambient state, so tests can intercept events by subscribing a
/// recording closure. Handlers run inline on the publishing tick and must
/// not block.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Handler>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&GameEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn publish(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

//! Event bus carrying input messages to the stage

use crate::event::InputEvent;

/// A simple event queue that input handlers push to and the stage drains
pub struct EventBus {
    events: Vec<InputEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus in arrival order, returning them
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WheelModifiers;

    #[test]
    fn test_push_and_drain() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(InputEvent::PointerMoved { x: 10.0, y: 20.0 });
        bus.push(InputEvent::Wheel {
            delta: 100.0,
            modifiers: WheelModifiers::SHIFT,
        });

        assert_eq!(bus.len(), 2);
        assert!(!bus.is_empty());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], InputEvent::PointerMoved { x: 10.0, y: 20.0 });
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.push(InputEvent::Resized {
            width: 640,
            height: 480,
        });

        let _ = bus.drain();
        let events = bus.drain();
        assert!(events.is_empty());
    }
}

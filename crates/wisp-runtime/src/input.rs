//! Pointer state tracking

use wisp_core::Vec2;

/// Holds the latest pointer position reported by the host.
///
/// The stage copies this into the controllable system's emission origin
/// before each tick; nothing else reads it mid-frame.
pub struct PointerState {
    position: Vec2,
}

impl PointerState {
    /// Create pointer state at an initial position (usually surface center)
    pub fn new(initial: Vec2) -> Self {
        Self { position: initial }
    }

    /// Process a pointer move event
    pub fn process_move(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
    }

    /// The most recent pointer position
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

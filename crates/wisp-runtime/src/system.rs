//! Stage system trait

use crate::event::WheelModifiers;
use wisp_core::Vec2;
use wisp_render::{Bounds, Canvas};

/// Per-tick data handed to every system's update
pub struct FrameContext {
    /// Current surface bounds (unexpanded); may change between ticks on resize
    pub bounds: Bounds,
}

/// A system ticked by the stage.
///
/// Systems are updated in registration order, then drawn in registration
/// order. At most one registered system should report `controllable`; the
/// stage routes pointer and wheel input to the first one that does.
pub trait StageSystem {
    /// Advance the system by one frame
    fn update(&mut self, ctx: &FrameContext);

    /// Render the system onto the surface
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Human-readable name for this system
    fn name(&self) -> &str;

    /// Whether this system's origin and parameters are bound to user input
    fn controllable(&self) -> bool {
        false
    }

    /// Move the emission origin (called by the stage each tick while bound)
    fn set_origin(&mut self, _origin: Vec2) {}

    /// Apply a wheel gesture to the live parameters (called while bound)
    fn apply_wheel(&mut self, _delta: f64, _modifiers: WheelModifiers) {}

    /// Number of live entities, for stats reporting
    fn population(&self) -> usize {
        0
    }
}

//! Wisp Render - drawing-surface seam for the wisp engine
//!
//! The engine never talks to a platform canvas directly. It draws through
//! the [`Canvas`] trait:
//! - blend mode and global alpha state
//! - radial-gradient-filled circles (the only shape the effect needs)
//! - surface bounds, queryable each frame (they may change on resize)
//!
//! [`SoftCanvas`] is the bundled CPU implementation, used for headless
//! rendering, PNG export, and tests. A windowed host would provide its own
//! `Canvas` over a real surface.

mod soft;
mod surface;

pub use soft::SoftCanvas;
pub use surface::{BlendMode, Bounds, Canvas, RadialGradient};

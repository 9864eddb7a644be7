//! Wisp Particles - the particle simulation core
//!
//! Provides per-system particle simulation with:
//! - per-frame batch emission up to a soft capacity
//! - integration under a fresh stochastic drift sample every frame
//! - aging with size/opacity decay recomputed from the live settings
//! - conjunctive culling (removed only when off-surface AND dead)
//! - live parameter tuning from wheel gestures on the bound system

pub mod config;
pub mod particle;
pub mod rand_vec;
pub mod system;

pub use config::{load_effect, parse_effect, EmitterConfig};
pub use particle::Particle;
pub use rand_vec::random_vector;
pub use system::{ParticleSystem, CULL_MARGIN};

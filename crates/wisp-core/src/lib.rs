//! Wisp Core - Foundational types for the wisp engine
//!
//! This crate provides the core types that all other wisp crates depend on:
//! - `Vec2` - 2D vector with value semantics
//! - `Color` - RGBA color for gradient stops and pixels
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, WispError};
pub use types::{Color, Vec2};

//! CLI command implementations

pub mod render;
pub mod simulate;

use anyhow::{Context, Result};
use wisp_particles::{load_effect, ParticleSystem};
use wisp_runtime::{InputEvent, Stage};

/// Build a stage from an effect file: one particle system per `[[system]]`
/// table, origins defaulting to the surface center.
pub fn build_stage(effect_path: &str, width: u32, height: u32) -> Result<Stage> {
    let configs = load_effect(effect_path)
        .with_context(|| format!("failed to load effect '{}'", effect_path))?;

    let mut stage = Stage::new(width, height);
    let center = stage.bounds().center();
    for config in configs {
        stage.register_system(Box::new(ParticleSystem::new(config, center)));
    }

    println!(
        "[stage] {} system(s) from {}",
        stage.systems().count(),
        effect_path
    );
    Ok(stage)
}

/// Synthetic pointer input: one step along a circle around the surface
/// center per frame, a full revolution every 240 frames.
pub fn orbit_event(stage: &Stage, frame: u64) -> InputEvent {
    let bounds = stage.bounds();
    let center = bounds.center();
    let radius = bounds.width().min(bounds.height()) / 4.0;
    let theta = frame as f64 * std::f64::consts::TAU / 240.0;
    InputEvent::PointerMoved {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

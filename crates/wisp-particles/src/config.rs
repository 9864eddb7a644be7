//! Emitter configuration (parsed from TOML) and effect-file loading

use std::path::Path;
use wisp_core::{Result, Vec2, WispError};

/// Configuration for one particle system, as read from a `[[system]]` table
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Emission origin; `None` resolves to the surface center
    pub origin: Option<Vec2>,
    pub max_particles: usize,
    pub particle_life: f64,
    pub particle_size: f64,
    pub creation_rate: usize,
    pub scatter_range: f64,
    pub drift_rate: f64,
    pub controllable: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            origin: None,
            max_particles: 300,
            particle_life: 60.0,
            particle_size: 24.0,
            creation_rate: 3,
            scatter_range: 1.3,
            drift_rate: 0.5,
            controllable: false,
        }
    }
}

impl EmitterConfig {
    /// Parse an EmitterConfig from a TOML table. Missing keys keep their
    /// defaults; negative capacities clamp to zero (an empty-forever
    /// system) rather than failing.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("origin") {
            config.origin = toml_vec2(v);
        }
        if let Some(v) = table.get("max_particles") {
            config.max_particles = v.as_integer().unwrap_or(300).max(0) as usize;
        }
        if let Some(v) = table.get("particle_life") {
            config.particle_life = toml_f64(v, config.particle_life);
        }
        if let Some(v) = table.get("particle_size") {
            config.particle_size = toml_f64(v, config.particle_size);
        }
        if let Some(v) = table.get("creation_rate") {
            config.creation_rate = v.as_integer().unwrap_or(3).max(0) as usize;
        }
        if let Some(v) = table.get("scatter_range") {
            config.scatter_range = toml_f64(v, config.scatter_range);
        }
        if let Some(v) = table.get("drift_rate") {
            config.drift_rate = toml_f64(v, config.drift_rate);
        }
        if let Some(v) = table.get("controllable") {
            config.controllable = v.as_bool().unwrap_or(false);
        }

        config
    }
}

/// Parse an effect file: one `[[system]]` table per particle system
pub fn parse_effect(source: &str) -> Result<Vec<EmitterConfig>> {
    let value: toml::Value = toml::from_str(source)?;
    let systems = value
        .get("system")
        .and_then(|v| v.as_array())
        .ok_or_else(|| WispError::ConfigError("no [[system]] tables in effect".to_string()))?;

    systems
        .iter()
        .map(|entry| {
            entry
                .as_table()
                .map(EmitterConfig::from_toml)
                .ok_or_else(|| {
                    WispError::ConfigError("[[system]] entry is not a table".to_string())
                })
        })
        .collect()
}

/// Load an effect file from disk
pub fn load_effect(path: impl AsRef<Path>) -> Result<Vec<EmitterConfig>> {
    let source = std::fs::read_to_string(path)?;
    parse_effect(&source)
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f64(v: &toml::Value, default: f64) -> f64 {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .unwrap_or(default)
}

fn toml_vec2(v: &toml::Value) -> Option<Vec2> {
    let arr = v.as_array()?;
    if arr.len() < 2 {
        return None;
    }
    Some(Vec2::new(toml_f64(&arr[0], 0.0), toml_f64(&arr[1], 0.0)))
}

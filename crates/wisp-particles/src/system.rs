//! The particle system: emission, integration, culling, drawing, tuning

use crate::config::EmitterConfig;
use crate::particle::Particle;
use crate::rand_vec::random_vector;
use wisp_core::{Color, Vec2};
use wisp_render::{BlendMode, Bounds, Canvas, RadialGradient};
use wisp_runtime::{FrameContext, StageSystem, WheelModifiers};

/// Margin added to the surface bounds when deciding visibility for culling.
/// A particle inside the expanded rectangle may still drift back on screen.
pub const CULL_MARGIN: f64 = 100.0;

/// An emitter owning a bounded population of particles with shared live
/// parameters.
///
/// Per tick, surviving particles are integrated and culled first, then a
/// full emission batch is appended if the population is under capacity —
/// so a particle is rendered at full life and size on its birth frame, and
/// the population can overshoot `max_particles` by at most
/// `creation_rate - 1`.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    origin: Vec2,
    max_particles: usize,
    particle_life: f64,
    particle_size: f64,
    creation_rate: usize,
    scatter_range: f64,
    drift_rate: f64,
    controllable: bool,
}

impl ParticleSystem {
    /// Build a system from a config; `default_origin` (usually the surface
    /// center) applies when the config does not pin one.
    pub fn new(config: EmitterConfig, default_origin: Vec2) -> Self {
        Self {
            particles: Vec::new(),
            origin: config.origin.unwrap_or(default_origin),
            max_particles: config.max_particles,
            particle_life: config.particle_life,
            particle_size: config.particle_size,
            creation_rate: config.creation_rate,
            scatter_range: config.scatter_range,
            drift_rate: config.drift_rate,
            controllable: config.controllable,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn scatter_range(&self) -> f64 {
        self.scatter_range
    }

    pub fn particle_size(&self) -> f64 {
        self.particle_size
    }

    pub fn particle_life(&self) -> f64 {
        self.particle_life
    }

    /// Mean remaining-life fraction across the population, in [0, 1]
    pub fn mean_life_ratio(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        self.particles.iter().map(|p| p.life_ratio()).sum::<f64>() / self.particles.len() as f64
    }

    /// Wheel gesture with the scatter modifier held
    pub fn adjust_scatter(&mut self, delta: f64) {
        self.scatter_range = (self.scatter_range - delta / 100.0).max(0.0);
    }

    /// Wheel gesture with the size modifier held
    pub fn adjust_size(&mut self, delta: f64) {
        self.particle_size = (self.particle_size - delta / 100.0).max(0.0);
    }

    /// Unmodified wheel gesture. Life floors at 1, never 0 — it divides
    /// both size decay and draw opacity.
    pub fn adjust_life(&mut self, delta: f64) {
        self.particle_life = (self.particle_life - delta / 10.0).max(1.0);
    }

    /// Integrate surviving particles and drop the ones that are both
    /// outside the expanded bounds and dead.
    fn advance(&mut self, bounds: Bounds) {
        let visible = bounds.expand(CULL_MARGIN);
        let drift_rate = self.drift_rate;
        let particle_size = self.particle_size;
        let particle_life = self.particle_life;

        self.particles.retain_mut(|p| {
            p.velocity += random_vector(-drift_rate, drift_rate);
            p.position += p.velocity;
            p.life -= 1.0;
            p.size = (particle_size * (p.life / particle_life)).max(0.0);
            visible.contains(p.position) || p.alive()
        });
    }

    /// Append a full emission batch if the population is under capacity.
    /// The check happens once, before the batch.
    fn emit(&mut self) {
        if self.particles.len() >= self.max_particles {
            return;
        }
        for _ in 0..self.creation_rate {
            self.particles.push(Particle::spawn(
                self.origin,
                random_vector(-self.scatter_range, self.scatter_range),
                self.particle_life,
                self.particle_size,
            ));
        }
    }
}

impl StageSystem for ParticleSystem {
    fn update(&mut self, ctx: &FrameContext) {
        self.advance(ctx.bounds);
        self.emit();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_blend_mode(BlendMode::Additive);

        let paint = RadialGradient::new()
            .with_stop(0.0, Color::WHITE.with_alpha(0.8))
            .with_stop(0.3, Color::WHITE.with_alpha(0.5))
            .with_stop(1.0, Color::TRANSPARENT);

        for p in &self.particles {
            // opacity tracks the *current* life setting, so live tuning
            // rescales the fade of existing particles too
            canvas.set_global_alpha(p.life / self.particle_life);
            canvas.fill_circle(p.position, p.size, &paint);
        }
    }

    fn name(&self) -> &str {
        "particles"
    }

    fn controllable(&self) -> bool {
        self.controllable
    }

    fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    fn apply_wheel(&mut self, delta: f64, modifiers: WheelModifiers) {
        if modifiers.shift {
            self.adjust_scatter(delta);
        } else if modifiers.alt {
            self.adjust_size(delta);
        } else {
            self.adjust_life(delta);
        }
    }

    fn population(&self) -> usize {
        self.particles.len()
    }
}

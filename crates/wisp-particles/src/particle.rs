//! A single simulated particle

use wisp_core::Vec2;

/// One simulated point: position, velocity, remaining life, render size.
///
/// `initial_life` is captured at spawn and never changes; `life` counts
/// down one unit per frame. Size is recomputed by the owning system each
/// frame, so it stays consistent with live-tuned settings.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f64,
    pub initial_life: f64,
    pub size: f64,
}

impl Particle {
    /// Spawn a particle at `origin` (captured by value — it does not keep
    /// tracking a moving emission point)
    pub fn spawn(origin: Vec2, velocity: Vec2, life: f64, size: f64) -> Self {
        Self {
            position: origin,
            velocity,
            life,
            initial_life: life,
            size,
        }
    }

    /// A particle is alive until its life goes negative; the frame at
    /// exactly zero still counts.
    pub fn alive(&self) -> bool {
        self.life >= 0.0
    }

    /// Fraction of the spawn-time life still remaining, in [0, 1]
    pub fn life_ratio(&self) -> f64 {
        if self.initial_life <= 0.0 {
            0.0
        } else {
            (self.life / self.initial_life).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_captures_origin_by_value() {
        let origin = Vec2::new(10.0, 20.0);
        let p = Particle::spawn(origin, Vec2::ZERO, 60.0, 24.0);
        assert_eq!(p.position, origin);
        assert_eq!(p.life, 60.0);
        assert_eq!(p.initial_life, 60.0);
        assert_eq!(p.size, 24.0);
    }

    #[test]
    fn alive_at_zero_dead_below() {
        let mut p = Particle::spawn(Vec2::ZERO, Vec2::ZERO, 0.0, 1.0);
        assert!(p.alive());
        p.life = -1.0;
        assert!(!p.alive());
    }

    #[test]
    fn life_ratio_counts_down() {
        let mut p = Particle::spawn(Vec2::ZERO, Vec2::ZERO, 4.0, 1.0);
        assert_eq!(p.life_ratio(), 1.0);
        p.life = 1.0;
        assert_eq!(p.life_ratio(), 0.25);
        p.life = -2.0;
        assert_eq!(p.life_ratio(), 0.0);
    }

    #[test]
    fn life_ratio_degenerate_initial_life() {
        let p = Particle::spawn(Vec2::ZERO, Vec2::ZERO, 0.0, 1.0);
        assert_eq!(p.life_ratio(), 0.0);
    }
}

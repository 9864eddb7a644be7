//! The `Canvas` trait and the paint/geometry values it consumes

use serde::{Deserialize, Serialize};
use wisp_core::{Color, Vec2};

/// Blend mode for drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Standard source-over alpha compositing
    Alpha,
    /// Additive ("lighter") compositing
    Additive,
}

/// An axis-aligned rectangle in surface coordinates.
///
/// `contains` uses exclusive edges: a point sitting exactly on the border
/// counts as outside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds covering a surface of the given size, anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Grow the rectangle by `margin` on all four sides
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Vec2::new(self.min.x - margin, self.min.y - margin),
            max: Vec2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }
}

/// A radial gradient paint: color stops at normalized offsets in [0, 1],
/// sampled from the circle center (0.0) out to its edge (1.0).
#[derive(Debug, Clone)]
pub struct RadialGradient {
    stops: Vec<(f32, Color)>,
}

impl RadialGradient {
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Add a color stop. Stops must be added in ascending offset order.
    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push((offset.clamp(0.0, 1.0), color));
        self
    }

    /// Sample the gradient at normalized distance `t`
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        match self.stops.as_slice() {
            [] => Color::TRANSPARENT,
            [(_, only)] => *only,
            stops => {
                if t <= stops[0].0 {
                    return stops[0].1;
                }
                for pair in stops.windows(2) {
                    let (o0, c0) = pair[0];
                    let (o1, c1) = pair[1];
                    if t <= o1 {
                        let span = o1 - o0;
                        let local = if span > 0.0 { (t - o0) / span } else { 1.0 };
                        return lerp_color(c0, c1, local);
                    }
                }
                stops[stops.len() - 1].1
            }
        }
    }
}

impl Default for RadialGradient {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear interpolation between two floats
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two RGBA colors
pub(crate) fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        lerp_f32(a.r, b.r, t),
        lerp_f32(a.g, b.g, t),
        lerp_f32(a.b, b.b, t),
        lerp_f32(a.a, b.a, t),
    )
}

/// A drawing surface the engine renders onto.
///
/// Implementations own the pixel store; the engine only issues state changes
/// and gradient-circle fills. Dimensions are re-queried every frame since the
/// host may resize the surface between ticks.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reset every pixel to transparent
    fn clear(&mut self);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Set the alpha multiplier applied to subsequent fills, clamped to [0, 1]
    fn set_global_alpha(&mut self, alpha: f64);

    /// Fill a circle of `radius` centered at `center` with a radial gradient.
    /// A non-positive radius draws nothing.
    fn fill_circle(&mut self, center: Vec2, radius: f64, paint: &RadialGradient);

    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width() as f64, self.height() as f64)
    }
}

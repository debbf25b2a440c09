//! Scene primitives emitted by the generator.
//!
//! A [`Scene`] is a flat, serializable list of drawable primitives plus the
//! fixed gradient table. Turning it into pixels is the renderer's job; the
//! pass helpers on `Scene` encode the draw ordering the renderer is expected
//! to follow (blurred curtain first, then sharp streaks, then hero inner
//! cores, then particles, then the bottom-fade mask).

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::{GradientDef, GradientId};

/// Rendering pass membership for a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Crisp foreground pass, drawn second.
    Sharp,
    /// Soft pass, drawn first, offset 4-6 px upward with screen compositing
    /// to read as light falling from above.
    Blurred,
}

/// Which decorative loop produced a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    Spark,
    Bokeh,
    Shimmer,
    GlowOrb,
    BronzeShimmer,
}

/// A single drawable light-beam primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    /// Horizontal anchor in pixels, within `[0, width]`.
    pub x: f64,
    /// Vertical start, in `[-5, 0]`: streaks anchor at or just above the
    /// top edge.
    pub y_top: f64,
    /// Vertical extent in pixels, in `[0.22*height, 0.65*height]`.
    pub length: f64,
    /// Stroke width in pixels, in `[1, 6]`.
    pub width: f64,
    /// Alpha in `(0, 1]`; the depth layer sits dimmer than the main pass.
    pub opacity: f64,
    /// Blur radius in pixels; 0 on the sharp layer, 3-6 on the blurred one.
    pub blur: f64,
    /// Rendering pass membership.
    pub layer: Layer,
    /// Which color ramp to sample.
    pub gradient: GradientId,
    /// Marks thick interior streaks that get the inner-core highlight
    /// overlay.
    pub is_hero: bool,
}

impl Streak {
    /// Vertical endpoint of the streak.
    pub fn y_bottom(&self) -> f64 {
        self.y_top + self.length
    }
}

/// A decorative point primitive (spark, bokeh, shimmer, glow, or bronze
/// dot). Particles carry no identity; they are regenerated wholesale on
/// every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radius in pixels.
    pub radius: f64,
    /// Alpha in `(0, 1]`.
    pub opacity: f64,
    /// Fixed palette color.
    pub color: Color,
    /// Which pass produced this particle.
    pub kind: ParticleKind,
    /// Whether the renderer should soften this particle.
    pub blurred: bool,
}

/// A complete drawable background scene.
///
/// Streaks appear in generation order: main pass, then cluster members,
/// then the depth layer. Particles appear in pass order: sparks, bokeh,
/// shimmer, glow orbs, bronze shimmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub streaks: Vec<Streak>,
    pub particles: Vec<Particle>,
    /// The fixed named ramps consumed by the renderer.
    pub gradients: Vec<GradientDef>,
}

impl Scene {
    /// Streaks on the blurred layer. The renderer draws these first.
    pub fn blurred_streaks(&self) -> impl Iterator<Item = &Streak> {
        self.streaks.iter().filter(|s| s.layer == Layer::Blurred)
    }

    /// Streaks on the sharp layer, drawn over the blurred pass.
    pub fn sharp_streaks(&self) -> impl Iterator<Item = &Streak> {
        self.streaks.iter().filter(|s| s.layer == Layer::Sharp)
    }

    /// Streaks carrying the inner-core highlight overlay.
    pub fn hero_streaks(&self) -> impl Iterator<Item = &Streak> {
        self.streaks.iter().filter(|s| s.is_hero)
    }

    /// Particles belonging to one decorative pass.
    pub fn particles_of(&self, kind: ParticleKind) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(move |p| p.kind == kind)
    }

    /// True when the scene has no drawable primitives at all.
    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty() && self.particles.is_empty()
    }
}

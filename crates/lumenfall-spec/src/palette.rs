//! The fixed palette: named gradient ramps and particle colors.
//!
//! Gradient identifiers form a closed enum so the renderer gets
//! compile-time exhaustiveness instead of stringly-typed palette keys.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Identifier for one of the fixed color-gradient ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientId {
    /// Warm gold, the dominant streak color.
    Gold,
    /// Violet accent, weighted toward the canvas edges.
    Amethyst,
    /// Soft pink accent.
    Rose,
    /// Rare pale-blue highlight reserved for hero streaks.
    Ice,
    /// Muted warm tone used by the depth layer.
    Amber,
    /// Dark warm tone used by the depth layer and bronze shimmer.
    Bronze,
}

impl GradientId {
    /// All gradient ids, in palette order.
    pub const ALL: [GradientId; 6] = [
        GradientId::Gold,
        GradientId::Amethyst,
        GradientId::Rose,
        GradientId::Ice,
        GradientId::Amber,
        GradientId::Bronze,
    ];

    /// Returns the gradient id as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientId::Gold => "gold",
            GradientId::Amethyst => "amethyst",
            GradientId::Rose => "rose",
            GradientId::Ice => "ice",
            GradientId::Amber => "amber",
            GradientId::Bronze => "bronze",
        }
    }

    /// The ramp definition for this id.
    pub fn def(&self) -> GradientDef {
        let top = match self {
            GradientId::Gold => Color::rgb(1.0, 0.84, 0.35),
            GradientId::Amethyst => Color::rgb(0.68, 0.45, 0.93),
            GradientId::Rose => Color::rgb(0.96, 0.55, 0.66),
            GradientId::Ice => Color::rgb(0.80, 0.93, 1.0),
            GradientId::Amber => Color::rgb(0.98, 0.70, 0.25),
            GradientId::Bronze => Color::rgb(0.74, 0.54, 0.30),
        };
        GradientDef {
            id: *self,
            top,
            tail: top.with_alpha(0.0),
        }
    }
}

/// A named gradient ramp: full-strength color at the streak head fading to
/// transparent at the tail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDef {
    /// Which ramp this defines.
    pub id: GradientId,
    /// Color at the top (head) of the streak.
    pub top: Color,
    /// Color at the bottom (tail) of the streak.
    pub tail: Color,
}

/// The full gradient table shipped with every scene, in palette order.
pub fn gradient_defs() -> Vec<GradientDef> {
    GradientId::ALL.iter().map(|id| id.def()).collect()
}

/// Spark particle color (bright warm white).
pub const SPARK: Color = Color::rgb(1.0, 0.93, 0.72);
/// Shimmer dot color (pale gold).
pub const SHIMMER: Color = Color::rgb(1.0, 0.88, 0.55);
/// Glow orb color (diffuse gold).
pub const GLOW: Color = Color::rgb(1.0, 0.80, 0.42);
/// Bronze shimmer dot color.
pub const BRONZE_SHIMMER: Color = Color::rgb(0.78, 0.58, 0.34);
/// Bokeh color choices (weighted gold / amethyst / ice).
pub const BOKEH_GOLD: Color = Color::rgb(1.0, 0.85, 0.45);
pub const BOKEH_AMETHYST: Color = Color::rgb(0.70, 0.50, 0.92);
pub const BOKEH_ICE: Color = Color::rgb(0.82, 0.92, 1.0);

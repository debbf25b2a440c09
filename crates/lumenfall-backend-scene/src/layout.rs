//! Main streak pass: per-streak geometric layout.
//!
//! Draw order per streak (part of the determinism contract):
//!
//! 1. `y_top` band draw
//! 2. anchor selector, then the anchor position draw
//! 3. base length draw
//! 4. width draws (edge: one; interior: hero check, then width)
//! 5. layer draw, then blur radius if blurred
//! 6. gradient draw, then the ice-highlight draw for the first heroes
//!
//! Opacity and the edge/arch length adjustments are computed from values
//! already drawn and consume nothing.

use lumenfall_spec::{GradientId, Intensity, Layer, Streak};

use crate::rng::StreakRng;

/// Fraction of canvas width treated as an edge zone on each side.
pub const EDGE_ZONE: f64 = 0.15;
/// Center band (as x/width) in which edge length scaling is identity.
pub const CENTER_BAND: (f64, f64) = (0.36, 0.64);
/// Maximum edge length boost.
const EDGE_BOOST: f64 = 0.35;
/// Arch droop amplitude as a fraction of canvas height.
const ARCH_DROP: f64 = 0.10;
/// Post-scaling length bounds as fractions of canvas height.
pub const MIN_LENGTH_RATIO: f64 = 0.22;
pub const MAX_LENGTH_RATIO: f64 = 0.65;
/// Uplift applied to the requested count; the extra population feeds the
/// left-density bias.
const COUNT_UPLIFT: f64 = 1.18;
/// How many leading hero streaks may roll the ice highlight.
const ICE_HERO_LIMIT: usize = 8;

/// Number of streaks the main pass emits for a given base count.
pub fn main_emit_count(count: u32, intensity: Intensity) -> usize {
    (count as f64 * intensity.scale() * COUNT_UPLIFT).floor() as usize
}

/// Length multiplier for a horizontal position.
///
/// Exactly 1.0 inside the center band; outside it, a quadratic ease-out
/// toward the page edge boosts length by up to 35%.
pub fn edge_length_scale(x_ratio: f64) -> f64 {
    let (lo, hi) = CENTER_BAND;
    let t = if x_ratio < lo {
        (lo - x_ratio) / lo
    } else if x_ratio > hi {
        (x_ratio - hi) / (1.0 - hi)
    } else {
        return 1.0;
    };
    let t = t.clamp(0.0, 1.0);
    let eased = t * (2.0 - t);
    1.0 + EDGE_BOOST * eased
}

/// Downward arch nudge: edges droop more than the center.
pub fn arch_drop(x_ratio: f64, height: f64) -> f64 {
    ARCH_DROP * height * (x_ratio - 0.5).abs().powf(1.6)
}

/// Whether a position falls in the outer 15% band on either side.
pub fn in_edge_zone(x_ratio: f64) -> bool {
    x_ratio < EDGE_ZONE || x_ratio > 1.0 - EDGE_ZONE
}

/// Vertical anchor just at/above the canvas top. One draw.
pub(crate) fn place_y_top(rng: &mut StreakRng) -> f64 {
    -(5.0 * rng.next_f64())
}

/// Horizontal anchor placement. Consumes exactly two draws: the three-way
/// selector, then the position.
///
/// 12.5% of streaks are forced into each outer 15% band; the remaining 75%
/// take the mirrored power transform `1 - u^0.85`, which concentrates
/// density left of center.
pub(crate) fn place_x(rng: &mut StreakRng, width: f64) -> f64 {
    let selector = rng.next_f64();
    if selector < 0.125 {
        width * EDGE_ZONE * rng.next_f64()
    } else if selector < 0.25 {
        width * (1.0 - EDGE_ZONE + EDGE_ZONE * rng.next_f64())
    } else {
        width * (1.0 - rng.next_f64().powf(0.85))
    }
}

/// Base length, edge scaling, arch droop, and the final clamp. One draw.
pub(crate) fn place_length(rng: &mut StreakRng, x_ratio: f64, height: f64) -> f64 {
    let base = rng.next_range(0.25 * height, 0.55 * height);
    let scaled = base * edge_length_scale(x_ratio) + arch_drop(x_ratio, height);
    scaled.clamp(MIN_LENGTH_RATIO * height, MAX_LENGTH_RATIO * height)
}

/// Opacity from endpoint depth: the higher the endpoint, the brighter the
/// streak, with a dimming multiplier in the edge zones. Consumes no draws.
fn opacity_for(y_bottom: f64, height: f64, edge: bool) -> f64 {
    let t = (y_bottom / (MAX_LENGTH_RATIO * height)).clamp(0.0, 1.0);
    let mut opacity = 0.95 - (0.95 - 0.35) * t;
    if edge {
        opacity *= 0.85;
    }
    opacity.clamp(0.3, 0.95)
}

/// Weighted gradient choice; the edge zones lean amethyst. One draw.
fn pick_gradient(rng: &mut StreakRng, edge: bool) -> GradientId {
    let roll = rng.next_f64();
    if edge {
        if roll < 0.40 {
            GradientId::Amethyst
        } else if roll < 0.70 {
            GradientId::Gold
        } else if roll < 0.88 {
            GradientId::Rose
        } else {
            GradientId::Amber
        }
    } else if roll < 0.45 {
        GradientId::Gold
    } else if roll < 0.70 {
        GradientId::Rose
    } else if roll < 0.90 {
        GradientId::Amethyst
    } else {
        GradientId::Amber
    }
}

/// Generates the main streak population.
pub fn main_streaks(
    rng: &mut StreakRng,
    width: f64,
    height: f64,
    count: u32,
    intensity: Intensity,
) -> Vec<Streak> {
    let emit = main_emit_count(count, intensity);
    let mut streaks = Vec::with_capacity(emit);
    let mut heroes = 0usize;

    for _ in 0..emit {
        let y_top = place_y_top(rng);
        let x = place_x(rng, width);
        let x_ratio = x / width;
        let edge = in_edge_zone(x_ratio);

        let length = place_length(rng, x_ratio, height);

        let mut is_hero = false;
        let stroke = if edge {
            // Edge streaks stay thin.
            rng.next_range(1.0, 3.0)
        } else if rng.next_bool(0.10) {
            is_hero = true;
            rng.next_range(4.0, 6.0)
        } else {
            // Square bias toward thin interior strokes.
            let t = rng.next_f64();
            1.0 + t * t * 2.5
        };

        let opacity = opacity_for(y_top + length, height, edge);

        let (layer, blur) = if rng.next_bool(0.65) {
            (Layer::Sharp, 0.0)
        } else {
            (Layer::Blurred, rng.next_range(3.0, 6.0))
        };

        let mut gradient = pick_gradient(rng, edge);
        if is_hero && heroes < ICE_HERO_LIMIT {
            heroes += 1;
            if rng.next_bool(0.08) {
                gradient = GradientId::Ice;
            }
        }

        streaks.push(Streak {
            x,
            y_top,
            length,
            width: stroke,
            opacity,
            blur,
            layer,
            gradient,
            is_hero,
        });
    }

    streaks
}

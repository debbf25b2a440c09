//! Depth layer pass: a dimmer, blurrier streak population rendered behind
//! the main curtain for a parallax illusion.
//!
//! Draw order per streak: `y_top`, anchor selector + position, base length,
//! width, layer draw (+ blur radius when blurred), gradient draw.

use lumenfall_spec::{GradientId, Intensity, Layer, Streak};

use crate::layout::{
    arch_drop, edge_length_scale, place_x, place_y_top, MAX_LENGTH_RATIO, MIN_LENGTH_RATIO,
};
use crate::rng::StreakRng;

/// Depth population as a fraction of the intensity-scaled base count.
const DEPTH_FRACTION: f64 = 0.4;
/// Probability that a depth streak lands on the blurred layer.
const BLUR_CHANCE: f64 = 0.65;

/// Number of streaks the depth pass emits for a given base count.
pub fn depth_emit_count(count: u32, intensity: Intensity) -> usize {
    (count as f64 * intensity.scale() * DEPTH_FRACTION).floor() as usize
}

/// Warm-skewed gradient pick for the depth layer. One draw.
fn pick_gradient(rng: &mut StreakRng) -> GradientId {
    let roll = rng.next_f64();
    if roll < 0.45 {
        GradientId::Amber
    } else if roll < 0.75 {
        GradientId::Bronze
    } else if roll < 0.90 {
        GradientId::Gold
    } else {
        GradientId::Amethyst
    }
}

/// Dim opacity from endpoint depth, mapped into [0.15, 0.45].
fn opacity_for(y_bottom: f64, height: f64) -> f64 {
    let t = (y_bottom / (MAX_LENGTH_RATIO * height)).clamp(0.0, 1.0);
    (0.45 - (0.45 - 0.15) * t).clamp(0.15, 0.45)
}

/// Generates the depth streak population. Shares the anchoring, edge-bias,
/// and arch geometry of the main pass.
pub fn depth_streaks(
    rng: &mut StreakRng,
    width: f64,
    height: f64,
    count: u32,
    intensity: Intensity,
) -> Vec<Streak> {
    let emit = depth_emit_count(count, intensity);
    let mut streaks = Vec::with_capacity(emit);

    for _ in 0..emit {
        let y_top = place_y_top(rng);
        let x = place_x(rng, width);
        let x_ratio = x / width;

        let base = rng.next_range(0.25 * height, 0.55 * height);
        let length = (base * edge_length_scale(x_ratio) + arch_drop(x_ratio, height))
            .clamp(MIN_LENGTH_RATIO * height, MAX_LENGTH_RATIO * height);

        let stroke = rng.next_range(1.0, 2.5);
        let opacity = opacity_for(y_top + length, height);

        let (layer, blur) = if rng.next_bool(BLUR_CHANCE) {
            (Layer::Blurred, rng.next_range(3.0, 6.0))
        } else {
            (Layer::Sharp, 0.0)
        };

        let gradient = pick_gradient(rng);

        streaks.push(Streak {
            x,
            y_top,
            length,
            width: stroke,
            opacity,
            blur,
            layer,
            gradient,
            is_hero: false,
        });
    }

    streaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(seed: u32) -> Vec<Streak> {
        let mut rng = StreakRng::new(seed);
        depth_streaks(&mut rng, 1440.0, 800.0, 300, Intensity::Full)
    }

    #[test]
    fn test_emit_count() {
        assert_eq!(depth_emit_count(300, Intensity::Full), 120);
        assert_eq!(depth_emit_count(300, Intensity::Minimal), 24);
        assert_eq!(fixture(2025).len(), 120);
    }

    #[test]
    fn test_depth_is_dim() {
        for s in fixture(2025) {
            assert!(
                (0.15..=0.45).contains(&s.opacity),
                "depth opacity {} out of range",
                s.opacity
            );
        }
    }

    #[test]
    fn test_blur_majority() {
        let streaks = fixture(2025);
        let blurred = streaks.iter().filter(|s| s.layer == Layer::Blurred).count();
        // 65% expected of 120; well above half even with sampling noise.
        assert!(blurred * 2 > streaks.len(), "only {blurred} blurred");
    }

    #[test]
    fn test_gradient_skew_is_warm() {
        let streaks = fixture(2025);
        let warm = streaks
            .iter()
            .filter(|s| matches!(s.gradient, GradientId::Amber | GradientId::Bronze))
            .count();
        // 75% expected amber/bronze.
        assert!(warm * 2 > streaks.len(), "only {warm} warm streaks");
        assert!(streaks.iter().all(|s| s.gradient != GradientId::Ice));
        assert!(streaks.iter().all(|s| s.gradient != GradientId::Rose));
    }

    #[test]
    fn test_geometry_bounds() {
        for s in fixture(9090) {
            assert!((-5.0..=0.0).contains(&s.y_top));
            let ratio = s.length / 800.0;
            assert!((MIN_LENGTH_RATIO..=MAX_LENGTH_RATIO).contains(&ratio));
            assert!((1.0..=6.0).contains(&s.width));
            assert!(!s.is_hero);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(fixture(123), fixture(123));
    }
}

//! Micro-cluster pass: duplicates a subset of main streaks into tight
//! multi-streak groups with jittered offsets.
//!
//! Draw order per visited source streak: the 40% selection draw; then per
//! member: offset magnitude, direction, width jitter, length jitter,
//! opacity jitter, blur-flip, and (for flipped members) a blur radius;
//! finally the skip-ahead draw.

use lumenfall_spec::{Layer, Streak};

use crate::layout::{MAX_LENGTH_RATIO, MIN_LENGTH_RATIO};
use crate::rng::StreakRng;

/// Probability that a visited source streak spawns a cluster.
const CLUSTER_CHANCE: f64 = 0.40;
/// Probability that a cluster member flips to the blurred layer.
const BLUR_FLIP_CHANCE: f64 = 0.30;

/// Generates cluster-member variants for a main-pass population.
pub fn cluster_streaks(
    rng: &mut StreakRng,
    main: &[Streak],
    width: f64,
    height: f64,
) -> Vec<Streak> {
    let mut members = Vec::new();
    let mut i = 0usize;

    while i < main.len() {
        if !rng.next_bool(CLUSTER_CHANCE) {
            i += 1;
            continue;
        }

        let source = &main[i];
        let member_count = 4 + (rng.next_f64() * 4.0).floor() as usize; // 4..=7

        for _ in 0..member_count {
            let magnitude = rng.next_range(2.0, 6.0);
            let dx = if rng.next_bool(0.5) { -magnitude } else { magnitude };
            let stroke = (source.width * rng.next_range(0.7, 1.2)).clamp(1.0, 6.0);
            let length = (source.length * rng.next_range(0.85, 1.15))
                .clamp(MIN_LENGTH_RATIO * height, MAX_LENGTH_RATIO * height);
            let opacity = (source.opacity * rng.next_range(0.75, 1.0)).clamp(0.15, 0.95);

            let (layer, blur) = if rng.next_bool(BLUR_FLIP_CHANCE) {
                (Layer::Blurred, rng.next_range(3.0, 6.0))
            } else {
                (source.layer, source.blur)
            };

            members.push(Streak {
                x: (source.x + dx).clamp(0.0, width),
                y_top: source.y_top,
                length,
                width: stroke,
                opacity,
                blur,
                layer,
                gradient: source.gradient,
                is_hero: false,
            });
        }

        // Leave a visible gap before the next cluster. The skip amount is a
        // stream draw even though it only moves the loop index; dropping it
        // would shift every later draw and invalidate recorded fixtures.
        i += 2 + (rng.next_f64() * 3.0).floor() as usize; // 2..=4
    }

    members
}

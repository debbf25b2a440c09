//! Decorative particle passes: sparks, bokeh, shimmer, glow orbs, and
//! bronze shimmer.
//!
//! Five independent fixed-count loops. Per particle, draw order: `x`
//! normal sample (two draws), `y` normal sample (two draws), radius,
//! opacity, then the color draw for passes that roll one (bokeh only).

use lumenfall_spec::{palette, Color, Particle, ParticleKind};

use crate::layout::MAX_LENGTH_RATIO;
use crate::rng::StreakRng;

/// Placement and appearance ranges for one particle pass.
struct PassProfile {
    kind: ParticleKind,
    count: usize,
    /// Vertical placement bias, as fractions of canvas height.
    y_mean: f64,
    y_std: f64,
    radius: (f64, f64),
    opacity: (f64, f64),
    blurred: bool,
}

/// Horizontal spread of every pass, as a fraction of canvas width.
const X_STD: f64 = 0.30;

const SPARKS: PassProfile = PassProfile {
    kind: ParticleKind::Spark,
    count: 28,
    y_mean: 0.18,
    y_std: 0.10,
    radius: (0.8, 2.0),
    opacity: (0.45, 0.90),
    blurred: false,
};

const BOKEH: PassProfile = PassProfile {
    kind: ParticleKind::Bokeh,
    count: 45,
    y_mean: 0.25,
    y_std: 0.14,
    radius: (2.0, 7.0),
    opacity: (0.10, 0.40),
    blurred: true,
};

const SHIMMER: PassProfile = PassProfile {
    kind: ParticleKind::Shimmer,
    count: 60,
    y_mean: 0.22,
    y_std: 0.12,
    radius: (0.5, 1.4),
    opacity: (0.25, 0.70),
    blurred: false,
};

const GLOW_ORBS: PassProfile = PassProfile {
    kind: ParticleKind::GlowOrb,
    count: 35,
    y_mean: 0.30,
    y_std: 0.15,
    radius: (4.0, 11.0),
    opacity: (0.06, 0.22),
    blurred: true,
};

const BRONZE_SHIMMER: PassProfile = PassProfile {
    kind: ParticleKind::BronzeShimmer,
    count: 40,
    y_mean: 0.35,
    y_std: 0.13,
    radius: (0.6, 1.6),
    opacity: (0.18, 0.55),
    blurred: false,
};

/// Three-way weighted bokeh color: gold 50%, amethyst 30%, ice 20%.
fn bokeh_color(rng: &mut StreakRng) -> Color {
    let roll = rng.next_f64();
    if roll < 0.5 {
        palette::BOKEH_GOLD
    } else if roll < 0.8 {
        palette::BOKEH_AMETHYST
    } else {
        palette::BOKEH_ICE
    }
}

fn spawn_pass(
    rng: &mut StreakRng,
    out: &mut Vec<Particle>,
    profile: &PassProfile,
    width: f64,
    height: f64,
) {
    for _ in 0..profile.count {
        let x = rng.next_normal(0.5 * width, X_STD * width).clamp(0.0, width);
        let y = rng
            .next_normal(profile.y_mean * height, profile.y_std * height)
            .clamp(0.0, MAX_LENGTH_RATIO * height);
        let radius = rng.next_range(profile.radius.0, profile.radius.1);
        let opacity = rng.next_range(profile.opacity.0, profile.opacity.1);
        let color = match profile.kind {
            ParticleKind::Spark => palette::SPARK,
            ParticleKind::Bokeh => bokeh_color(rng),
            ParticleKind::Shimmer => palette::SHIMMER,
            ParticleKind::GlowOrb => palette::GLOW,
            ParticleKind::BronzeShimmer => palette::BRONZE_SHIMMER,
        };

        out.push(Particle {
            x,
            y,
            radius,
            opacity,
            color,
            kind: profile.kind,
            blurred: profile.blurred,
        });
    }
}

/// Runs all five particle passes in their fixed order.
pub fn particle_passes(rng: &mut StreakRng, width: f64, height: f64) -> Vec<Particle> {
    let profiles = [&SPARKS, &BOKEH, &SHIMMER, &GLOW_ORBS, &BRONZE_SHIMMER];
    let mut out = Vec::with_capacity(profiles.iter().map(|p| p.count).sum());
    for profile in profiles {
        spawn_pass(rng, &mut out, profile, width, height);
    }
    out
}

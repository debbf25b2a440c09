//! Main entry point for scene generation.
//!
//! One seeded RNG is threaded through the passes in a fixed order: main
//! layout, clustering, depth layer, then the five particle passes. The
//! order is a contract; reordering passes or adding draws shifts the
//! stream and changes every recorded fixture.

use lumenfall_spec::{gradient_defs, BackgroundParams, Scene};

use crate::cluster::cluster_streaks;
use crate::depth::depth_streaks;
use crate::layout::{main_streaks, MAX_LENGTH_RATIO};
use crate::particles::particle_passes;
use crate::rng::StreakRng;

/// Generates a complete background scene.
///
/// Pure and total: any `BackgroundParams` value produces a scene, and the
/// same value always produces the same scene, bit for bit. Each invocation
/// owns its RNG and buffers; concurrent calls are fully independent.
pub fn generate_background(params: &BackgroundParams) -> Scene {
    let mut rng = StreakRng::new(params.seed);
    let (width, height) = (params.width, params.height);

    let main = main_streaks(&mut rng, width, height, params.count, params.intensity);
    let clusters = cluster_streaks(&mut rng, &main, width, height);
    let depth = depth_streaks(&mut rng, width, height, params.count, params.intensity);

    let mut streaks = main;
    streaks.extend(clusters);
    streaks.extend(depth);
    // Safety prune: nothing may extend below 65% of the canvas, keeping the
    // lower portion dark for text legibility.
    streaks.retain(|s| s.y_bottom() <= MAX_LENGTH_RATIO * height);

    let particles = particle_passes(&mut rng, width, height);

    Scene {
        streaks,
        particles,
        gradients: gradient_defs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumenfall_spec::Intensity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_is_deterministic() {
        let params = BackgroundParams::default();
        let a = generate_background(&params);
        let b = generate_background(&params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scene_is_populated() {
        let scene = generate_background(&BackgroundParams::default());
        assert!(!scene.is_empty());
        assert_eq!(scene.particles.len(), 208);
        assert_eq!(scene.gradients.len(), 6);
        // Main (354) and depth (120) are fixed; clusters add on top.
        assert!(scene.streaks.len() >= 354 + 120);
    }

    #[test]
    fn test_prune_bound_holds() {
        let params = BackgroundParams::default();
        let scene = generate_background(&params);
        for s in &scene.streaks {
            assert!(
                s.y_bottom() <= MAX_LENGTH_RATIO * params.height,
                "streak reaches {}",
                s.y_bottom()
            );
        }
    }

    #[test]
    fn test_seed_changes_scene() {
        let a = generate_background(&BackgroundParams::default());
        let b = generate_background(&BackgroundParams {
            seed: 2026,
            ..Default::default()
        });
        assert_ne!(a.streaks, b.streaks);
    }

    #[test]
    fn test_minimal_intensity_shrinks_population() {
        let full = generate_background(&BackgroundParams::default());
        let minimal = generate_background(&BackgroundParams {
            intensity: Intensity::Minimal,
            ..Default::default()
        });
        assert!(minimal.streaks.len() < full.streaks.len() / 2);
        // Particle passes are fixed-count regardless of intensity.
        assert_eq!(minimal.particles.len(), full.particles.len());
    }
}

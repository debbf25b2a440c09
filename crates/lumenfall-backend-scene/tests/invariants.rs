//! Scene-level invariant sweeps over a spread of seeds and canvas sizes.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lumenfall-backend-scene --test invariants
//! ```

use lumenfall_backend_scene::generate_background;
use lumenfall_backend_scene::layout::{edge_length_scale, main_emit_count, EDGE_ZONE};
use lumenfall_spec::{BackgroundParams, Intensity, Layer};

fn params(seed: u32, width: f64, height: f64) -> BackgroundParams {
    BackgroundParams {
        width,
        height,
        seed,
        ..Default::default()
    }
}

const CANVASES: [(f64, f64); 3] = [(1440.0, 800.0), (1920.0, 1080.0), (390.0, 844.0)];
const SEEDS: [u32; 4] = [2025, 0, 1, 0xDEAD_BEEF];

#[test]
fn streaks_anchor_at_the_top_edge() {
    for (w, h) in CANVASES {
        for seed in SEEDS {
            let scene = generate_background(&params(seed, w, h));
            for s in &scene.streaks {
                assert!(
                    (-5.0..=0.0).contains(&s.y_top),
                    "seed {seed} canvas {w}x{h}: y_top {}",
                    s.y_top
                );
            }
        }
    }
}

#[test]
fn no_streak_extends_below_65_percent() {
    for (w, h) in CANVASES {
        for seed in SEEDS {
            let scene = generate_background(&params(seed, w, h));
            for s in &scene.streaks {
                assert!(s.y_bottom() <= 0.65 * h, "seed {seed}: {}", s.y_bottom());
            }
        }
    }
}

#[test]
fn length_ratio_stays_in_band() {
    for (w, h) in CANVASES {
        for seed in SEEDS {
            let scene = generate_background(&params(seed, w, h));
            for s in &scene.streaks {
                let ratio = s.length / h;
                assert!(
                    (0.22..=0.65).contains(&ratio),
                    "seed {seed}: length ratio {ratio}"
                );
            }
        }
    }
}

#[test]
fn stroke_width_stays_in_band() {
    for (w, h) in CANVASES {
        for seed in SEEDS {
            let scene = generate_background(&params(seed, w, h));
            for s in &scene.streaks {
                assert!((1.0..=6.0).contains(&s.width), "seed {seed}: {}", s.width);
            }
        }
    }
}

#[test]
fn blur_matches_layer() {
    let scene = generate_background(&BackgroundParams::default());
    for s in &scene.streaks {
        match s.layer {
            Layer::Sharp => assert_eq!(s.blur, 0.0),
            Layer::Blurred => assert!((3.0..=6.0).contains(&s.blur)),
        }
    }
}

#[test]
fn edge_bands_are_populated() {
    // The forced 12.5% + 12.5% split guarantees both outer bands get
    // streaks at the reference configuration.
    let p = BackgroundParams::default();
    let scene = generate_background(&p);
    let main = &scene.streaks[..main_emit_count(p.count, p.intensity)];

    let left = main.iter().filter(|s| s.x < EDGE_ZONE * p.width).count();
    let right = main
        .iter()
        .filter(|s| s.x > (1.0 - EDGE_ZONE) * p.width)
        .count();

    assert!(left > 0, "left band empty");
    assert!(right > 0, "right band empty");
    // The forced split alone puts 12.5% + 12.5% of 354 (~88 expected) into
    // the bands, and the body draw only adds to it; a floor of 75 stays
    // within sampling tolerance of the split while catching a broken
    // selector threshold.
    assert!(
        left + right >= 75,
        "edge population {left}+{right} below the forced split"
    );
}

#[test]
fn center_band_length_boost_is_exactly_one() {
    let mut x = 0.36;
    while x <= 0.64 {
        assert_eq!(edge_length_scale(x), 1.0, "x_ratio {x}");
        x += 0.01;
    }
}

#[test]
fn minimal_intensity_is_a_fifth_of_full() {
    let full = main_emit_count(300, Intensity::Full);
    let minimal = main_emit_count(300, Intensity::Minimal);
    assert_eq!(full, 354);
    assert_eq!(minimal, 70);
    let ratio = minimal as f64 / full as f64;
    assert!((ratio - 0.2).abs() < 0.02, "intensity ratio {ratio}");
}

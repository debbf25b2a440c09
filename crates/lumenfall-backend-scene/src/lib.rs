//! Lumenfall Scene Generation Backend
//!
//! This crate generates the deterministic "light streak curtain" background
//! scene: gold/amethyst/rose beams anchored at the top of the canvas, a
//! dimmer parallax depth layer, micro-clusters, and five decorative
//! particle passes. Output is a plain [`Scene`](lumenfall_spec::Scene) of
//! drawable primitives; rasterization belongs to the consuming renderer.
//!
//! # Example
//!
//! ```
//! use lumenfall_backend_scene::generate_background;
//! use lumenfall_spec::BackgroundParams;
//!
//! let scene = generate_background(&BackgroundParams::default());
//! assert!(!scene.is_empty());
//! ```
//!
//! # Determinism
//!
//! Same params + same seed = bit-identical scene:
//!
//! - All randomness flows through [`StreakRng`], a 32-bit integer-mix PRNG
//!   with exact wraparound semantics
//! - Each pass documents its draw order, and pass order is fixed
//! - Scenes are pinned in regression suites via canonical BLAKE3 hashes
//!   (`lumenfall_spec::hash`)

pub mod cluster;
pub mod depth;
pub mod generate;
pub mod layout;
pub mod particles;
pub mod rng;

// Re-export main types for convenience
pub use generate::generate_background;
pub use rng::StreakRng;

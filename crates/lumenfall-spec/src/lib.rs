//! Lumenfall Scene Data Model
//!
//! This crate provides the parameter and primitive types for the Lumenfall
//! deterministic background generator, plus the fixed palette, parameter
//! validation, and canonical scene hashing.
//!
//! # Overview
//!
//! A background is described by [`BackgroundParams`] (canvas size, base
//! streak count, seed, intensity) and materializes as a [`Scene`]: flat
//! lists of [`Streak`] and [`Particle`] primitives together with the fixed
//! [`GradientDef`] table. The scene is plain data; rasterization belongs to
//! the consuming renderer.
//!
//! # Example
//!
//! ```
//! use lumenfall_spec::{BackgroundParams, Intensity};
//!
//! // Parse params from untrusted JSON; missing fields take defaults.
//! let params = BackgroundParams::from_json(r#"{"seed": 7}"#).unwrap();
//! assert_eq!(params.seed, 7);
//! assert_eq!(params.intensity, Intensity::Full);
//! ```
//!
//! # Determinism
//!
//! Scenes are hashed with [`hash::canonical_scene_hash`] (canonical JSON →
//! BLAKE3) so regression suites can pin a seed's exact output without
//! storing the full primitive list.
//!
//! # Modules
//!
//! - [`error`]: The ingestion-seam error type
//! - [`params`]: Generation parameters and validation
//! - [`scene`]: Streak/particle/scene primitives and renderer pass helpers
//! - [`color`]: RGBA color values
//! - [`palette`]: The closed gradient-id enum and fixed ramps
//! - [`hash`]: Canonical hashing for determinism fixtures

pub mod color;
pub mod error;
pub mod hash;
pub mod palette;
pub mod params;
pub mod scene;

// Re-export commonly used types at the crate root
pub use color::Color;
pub use error::SpecError;
pub use palette::{gradient_defs, GradientDef, GradientId};
pub use params::{
    BackgroundParams, Intensity, DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
};
pub use scene::{Layer, Particle, ParticleKind, Scene, Streak};

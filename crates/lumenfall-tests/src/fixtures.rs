//! Parameter fixtures shared across the e2e suites.

use lumenfall_spec::{BackgroundParams, Intensity};

/// Golden values recorded for [`reference_params`]. Any change to pass
/// order, draw order, or tuning constants shifts the stream and must
/// update these deliberately.
pub const REFERENCE_STREAK_COUNT: usize = 887;
pub const REFERENCE_PARTICLE_COUNT: usize = 208;
pub const REFERENCE_SCENE_HASH: &str =
    "6fc53be24e2fab77498690890dbf6a356e61b30b2726ebdeb975a715a2bb2aa8";

/// The reference configuration: all defaults (1440x800, count 300,
/// seed 2025, full intensity). Golden hashes are recorded against this.
pub fn reference_params() -> BackgroundParams {
    BackgroundParams::default()
}

/// Reference configuration at minimal intensity.
pub fn minimal_params() -> BackgroundParams {
    BackgroundParams {
        intensity: Intensity::Minimal,
        ..BackgroundParams::default()
    }
}

/// A phone-sized canvas with a non-default seed, for cross-checking that
/// invariants are not tuned to the reference dimensions.
pub fn phone_params() -> BackgroundParams {
    BackgroundParams {
        width: 390.0,
        height: 844.0,
        count: 180,
        seed: 42,
        intensity: Intensity::Full,
    }
}

//! Background generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 1440.0;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: f64 = 800.0;
/// Default base streak count (before intensity scaling and uplift).
pub const DEFAULT_COUNT: u32 = 300;
/// Default PRNG seed.
pub const DEFAULT_SEED: u32 = 2025;

/// Density multiplier for the streak field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// 20% of the requested streak count.
    Minimal,
    /// The full requested streak count.
    Full,
}

impl Intensity {
    /// The multiplier applied to the base streak count.
    pub fn scale(&self) -> f64 {
        match self {
            Intensity::Minimal => 0.2,
            Intensity::Full => 1.0,
        }
    }

    /// Returns the intensity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Minimal => "minimal",
            Intensity::Full => "full",
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Full
    }
}

/// Parameters for one background generation run.
///
/// Every field has a sane default, so `BackgroundParams::default()` is the
/// reference configuration used by the golden fixtures. Generation is total
/// over any hand-built value; [`BackgroundParams::validate`] exists for
/// callers ingesting untrusted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundParams {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Base streak count before intensity scaling.
    #[serde(default = "default_count")]
    pub count: u32,
    /// PRNG seed. Same seed + same dimensions = bit-identical scene.
    #[serde(default = "default_seed")]
    pub seed: u32,
    /// Density multiplier.
    #[serde(default)]
    pub intensity: Intensity,
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            count: DEFAULT_COUNT,
            seed: DEFAULT_SEED,
            intensity: Intensity::default(),
        }
    }
}

impl BackgroundParams {
    /// Parses and validates parameters from a JSON document.
    ///
    /// Missing fields take their defaults; present fields must pass
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that the canvas is real and the streak count non-zero.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SpecError::InvalidDimension {
                axis: "width",
                value: self.width,
            });
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(SpecError::InvalidDimension {
                axis: "height",
                value: self.height,
            });
        }
        if self.count == 0 {
            return Err(SpecError::ZeroCount);
        }
        Ok(())
    }
}

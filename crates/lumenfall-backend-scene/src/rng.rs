//! Deterministic RNG for scene generation.
//!
//! All generation passes MUST draw from this stream, in the order each
//! pass documents, to keep scenes reproducible. The generator is a
//! mulberry32-class 32-bit integer mix: every arithmetic step wraps at 32
//! bits, so the float sequence is identical on every platform and matches
//! any faithful port of the same mix function in another language.

/// Seeded 32-bit mix PRNG. Same seed always produces the same sequence.
///
/// Not cryptographic; statistical quality is more than enough for layout
/// jitter and the sequence contract is what matters.
#[derive(Debug, Clone)]
pub struct StreakRng {
    state: u32,
}

impl StreakRng {
    /// Creates a new RNG from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state once and returns the raw mixed word.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns the next value in [0, 1). Consumes exactly one draw.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform value in [min, max). Consumes exactly one draw.
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// True with probability `p`. Consumes exactly one draw.
    #[inline]
    pub fn next_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Normal sample via Box-Muller. Consumes exactly two draws, in order:
    /// the radius draw (guarded away from zero before the log) and then the
    /// angle draw.
    pub fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(f64::EPSILON);
        let u2 = self.next_f64();
        let mag = (-2.0 * u1.ln()).sqrt();
        mean + std_dev * mag * (std::f64::consts::TAU * u2).cos()
    }
}

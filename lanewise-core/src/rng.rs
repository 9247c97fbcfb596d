//! Deterministic PRNG for reproducible test and benchmark operands.
//!
//! `SplitMix64` is a fast 64-bit PRNG with a single u64 state. Besides
//! uniform values it can emit raw `f32` bit patterns, which covers NaN,
//! infinities, signed zeros and subnormals in the same stream.

/// SplitMix64 PRNG: deterministic, fast, statistically strong.
///
/// # Example
/// ```
/// use lanewise_core::SplitMix64;
///
/// let mut rng = SplitMix64::new(42);
/// let operand: Vec<f32> = (0..8).map(|_| rng.next_f32_in(-1.0, 1.0)).collect();
/// assert_eq!(operand.len(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    /// Create a new PRNG with the given seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1), top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f32 in [0, 1), top 24 bits.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform f32 in [lo, hi).
    #[inline]
    pub fn next_f32_in(&mut self, lo: f32, hi: f32) -> f32 {
        let v = lo + (hi - lo) * self.next_f32();
        // Rounding can land exactly on hi.
        if v >= hi {
            lo
        } else {
            v
        }
    }

    /// Arbitrary f32 bit pattern, special values included.
    #[inline]
    pub fn next_f32_bits(&mut self) -> f32 {
        f32::from_bits((self.next_u64() >> 32) as u32)
    }

    /// Vector of `len` values in [lo, hi).
    pub fn f32_vec(&mut self, len: usize, lo: f32, hi: f32) -> Vec<f32> {
        (0..len).map(|_| self.next_f32_in(lo, hi)).collect()
    }
}

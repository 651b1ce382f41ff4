//! Seeded pseudo-random source for white-noise generation
//!
//! The generator is a plain xorshift64* (shift triplet 12/25/27, multiplier
//! 0x2545F4914F6CDD1D). The algorithm is part of the crate's contract: the
//! same seed must yield the same float stream on every platform and in every
//! release, because reproducibility is the whole point of seeding.

/// Replacement state when a seed hashes to zero (xorshift sticks at 0).
const ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed for the noise generator.
///
/// Integer seeds are used as-is; text seeds are hashed with CRC-32 and
/// widened to 64 bits. The mapping is fixed, so a given text seed produces
/// the same field everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Int(u64),
    Text(String),
}

impl Seed {
    /// Collapse the seed into the 64-bit generator state.
    pub(crate) fn to_state(&self) -> u64 {
        match self {
            Seed::Int(v) => *v,
            Seed::Text(s) => {
                let h = crc32fast::hash(s.as_bytes()) as u64;
                // Widen 32 -> 64 bits; the multiplier decorrelates the halves.
                (h << 32) | (h.wrapping_mul(0x85EB_CA6B) & 0xFFFF_FFFF)
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Seed::Int(v)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

/// Deterministic float stream driving white-noise generation.
pub struct NoiseRng {
    state: u64,
}

impl NoiseRng {
    /// Create a generator with a fixed, reproducible stream.
    pub fn from_seed(seed: &Seed) -> Self {
        let state = seed.to_state();
        Self {
            state: if state == 0 { ZERO_SEED_STATE } else { state },
        }
    }

    /// Create a generator from OS entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_err() {
            // No OS entropy source; the clock is good enough for an
            // explicitly non-reproducible stream.
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(ZERO_SEED_STATE);
            buf = nanos.to_le_bytes();
        }
        let state = u64::from_le_bytes(buf);
        Self {
            state: if state == 0 { ZERO_SEED_STATE } else { state },
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Next float in [0, 1), built from the top 24 bits of the output.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
        (self.next_u64() >> 40) as f32 * SCALE
    }
}

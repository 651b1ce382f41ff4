//! Multi-octave blend (fractal Brownian motion)
//!
//! One white-noise base feeds every octave: level `k` is the base smoothed
//! at period `2^k`, weighted by `0.5^(octaves - k + 1)` so each octave
//! carries twice the amplitude of the next-finer one, and the weighted sum
//! is renormalized back into [0, 1].

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::NoiseGrid;
use crate::rng::{NoiseRng, Seed};
use crate::smooth::{smooth, MAX_OCTAVE_LEVEL};

/// Amplitude ratio between adjacent octaves.
const PERSISTENCE: f32 = 0.5;

/// Configured Perlin-noise synthesizer.
///
/// Everything is computed fresh per [`Perlin::generate`] call; the
/// synthesizer holds configuration only, never grids.
#[derive(Debug, Clone)]
pub struct Perlin {
    seed: Option<Seed>,
    width: u32,
    height: u32,
    octaves: u32,
}

impl Perlin {
    pub fn new(width: u32, height: u32, octaves: u32) -> Self {
        Self {
            seed: None,
            width,
            height,
            octaves,
        }
    }

    /// Fix the random stream so repeated generations are bit-identical.
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Synthesize the field. Validation happens before any computation;
    /// on error no partial grid is produced.
    pub fn generate(&self) -> Result<NoiseGrid> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.octaves == 0 {
            return Err(Error::InvalidOctaveCount {
                octaves: self.octaves,
            });
        }

        debug!(
            width = self.width,
            height = self.height,
            octaves = self.octaves,
            seeded = self.seed.is_some(),
            "generating perlin field"
        );

        let mut rng = match &self.seed {
            Some(seed) => NoiseRng::from_seed(seed),
            None => NoiseRng::from_entropy(),
        };
        let base = NoiseGrid::white_noise(self.width, self.height, &mut rng)?;

        let mut total = NoiseGrid::new(self.width, self.height)?;
        let mut total_amplitude = 0.0f32;

        for level in 1..=self.octaves {
            // Periods saturate at the grid size long before the shift
            // limit, so huge octave counts degenerate instead of failing.
            let layer = smooth(&base, level.min(MAX_OCTAVE_LEVEL))?;
            let amplitude = PERSISTENCE.powi((self.octaves - level) as i32 + 1);
            total_amplitude += amplitude;

            for y in 0..self.height {
                for x in 0..self.width {
                    let v = total.get(x, y) + amplitude * layer.get(x, y);
                    total.set(x, y, v);
                }
            }
        }

        for y in 0..self.height {
            for x in 0..self.width {
                total.set(x, y, total.get(x, y) / total_amplitude);
            }
        }

        Ok(total)
    }
}

/// Generate a `width` x `height` field of values in [0, 1].
///
/// The single public operation of the crate: seeded calls are
/// deterministic, unseeded calls draw from OS entropy.
pub fn generate(
    seed: Option<Seed>,
    width: u32,
    height: u32,
    octaves: u32,
) -> Result<NoiseGrid> {
    let mut perlin = Perlin::new(width, height, octaves);
    if let Some(seed) = seed {
        perlin = perlin.with_seed(seed);
    }
    perlin.generate()
}

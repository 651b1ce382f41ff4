//! Deterministic 2D Perlin-noise synthesis
//!
//! Architecture, bottom-up:
//! 1. `rng` - seeded pseudo-random float stream (xorshift64*)
//! 2. `grid` - dense row-major grids + white-noise base generation
//! 3. `smooth` - interpolated layers at power-of-two sampling periods
//! 4. `perlin` - multi-octave blend (fractal Brownian motion) + normalization
//!
//! The one operation exposed to consumers is [`generate`]: seed + dimensions
//! + octave count in, a grid of floats in [0, 1] out. Identical seeded calls
//! return bit-identical grids; lattice anchors wrap at the edges, so the
//! output tiles seamlessly.

mod error;
mod grid;
mod perlin;
mod rng;
mod smooth;

pub use error::{Error, Result};
pub use grid::NoiseGrid;
pub use perlin::{generate, Perlin};
pub use rng::{NoiseRng, Seed};
pub use smooth::{smooth, MAX_OCTAVE_LEVEL};

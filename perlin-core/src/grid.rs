//! Dense row-major float grids
//!
//! One grid type backs every stage of the pipeline: the white-noise base,
//! each smoothed layer, and the final field. Cells are stored row-major
//! (all x for y=0, then y=1, ...), matching the fill order of the random
//! stream.

use crate::error::{Error, Result};
use crate::rng::NoiseRng;

/// A width x height grid of `f32` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: u32,
    height: u32,
    cells: Vec<f32>,
}

impl NoiseGrid {
    /// Create a zero-filled grid. Rejects empty dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0.0; width as usize * height as usize],
        })
    }

    /// Fill a grid with independent values in [0, 1) pulled from `rng`
    /// in row-major order. Pure function of the stream.
    pub fn white_noise(width: u32, height: u32, rng: &mut NoiseRng) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for cell in &mut grid.cells {
            *cell = rng.next_f32();
        }
        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let i = self.idx(x, y);
        self.cells[i] = value;
    }

    /// One row of cells.
    pub fn row(&self, y: u32) -> &[f32] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    /// Copy out as nested vectors (`result[y][x]`).
    pub fn to_vecs(&self) -> Vec<Vec<f32>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Seed;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            NoiseGrid::new(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            NoiseGrid::new(10, 0),
            Err(Error::InvalidDimensions { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_white_noise_dimensions_and_range() {
        let mut rng = NoiseRng::from_seed(&Seed::from("grid"));
        let grid = NoiseGrid::white_noise(7, 3, &mut rng).unwrap();

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.as_slice().len(), 21);
        for &v in grid.as_slice() {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_white_noise_is_row_major_over_the_stream() {
        let seed = Seed::from(99u64);
        let mut rng = NoiseRng::from_seed(&seed);
        let grid = NoiseGrid::white_noise(4, 2, &mut rng).unwrap();

        let mut rng2 = NoiseRng::from_seed(&seed);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), rng2.next_f32());
            }
        }
    }

    #[test]
    fn test_row_accessors_agree() {
        let mut rng = NoiseRng::from_seed(&Seed::from(7u64));
        let grid = NoiseGrid::white_noise(5, 4, &mut rng).unwrap();

        let vecs = grid.to_vecs();
        assert_eq!(vecs.len(), 4);
        for y in 0..4 {
            assert_eq!(grid.row(y), vecs[y as usize].as_slice());
            for x in 0..5 {
                assert_eq!(grid.get(x, y), vecs[y as usize][x as usize]);
            }
        }
    }
}

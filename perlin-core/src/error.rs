#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid octave count: {octaves} (must be positive)")]
    InvalidOctaveCount { octaves: u32 },

    #[error("invalid octave level: {level} (max {max})")]
    InvalidOctaveLevel { level: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

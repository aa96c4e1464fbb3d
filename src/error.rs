use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("buffer of {len} pixels does not match {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, len: usize },
    #[error("{width}x{height} pixels do not fit in memory")]
    TooLarge { width: u32, height: u32 },
    #[error("{bytes} bytes is not a whole number of RGBA pixels")]
    PartialPixel { bytes: usize },
    #[error("invalid color {0:?}, expected RRGGBBAA")]
    InvalidColor(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

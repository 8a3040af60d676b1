use thiserror::Error;

/// Errors raised by the public entry points before any alignment or
/// compositing work begins. Internal degenerate cases (flat variance,
/// empty overlap) are not represented here — see [`crate::align::score`].
#[derive(Error, Debug)]
pub enum StitchError {
    #[error("no frames provided")]
    EmptyInput,

    #[error("frame {index} has width {width}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        width: u32,
        expected: u32,
    },

    #[error("frame {index}: crop leaves {effective_height} rows, need at least 8")]
    EffectiveHeightTooSmall { index: usize, effective_height: i64 },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("pixel buffer length {len} does not match {width}x{height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        len: usize,
    },

    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, StitchError>;

use thiserror::Error;

/// Error type for spatial denoising operations
///
/// Configuration problems are reported when a [`FilterConfig`](crate::FilterConfig)
/// is built, before any pixel is processed. Numeric edge cases inside a single
/// window (such as a flat region in local noise reduction) are handled locally
/// and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DenoiseError {
    /// The filter name does not match any known filter
    #[error("Unknown filter name: {0}")]
    UnknownFilter(String),

    /// Window size is zero or even
    ///
    /// Every window must have a single center pixel, so only odd
    /// positive sizes are accepted.
    #[error("Window size must be an odd positive integer, got {size}")]
    InvalidWindowSize { size: u32 },

    /// Maximum adaptive window size is zero or even
    #[error("Maximum adaptive window size must be an odd positive integer, got {size}")]
    InvalidMaxWindowSize { size: u32 },

    /// Local noise reduction was requested without a global noise variance
    #[error("Filter {filter} requires a global noise variance")]
    MissingNoiseVariance { filter: &'static str },

    /// Global noise variance is negative, NaN or infinite
    #[error("Global noise variance must be finite and non-negative, got {variance}")]
    InvalidNoiseVariance { variance: f32 },

    /// Input image has zero width or height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// A window reached past the padded image
    ///
    /// The filtering pass pads the image for the largest window it can
    /// request, so this indicates a padding bug rather than bad input.
    #[error(
        "Window of size {size} centered at ({x}, {y}) exceeds padded image {width}x{height}"
    )]
    WindowOutOfBounds {
        x: u32,
        y: u32,
        size: u32,
        width: u32,
        height: u32,
    },
}

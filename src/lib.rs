//! # imageops-denoise
//!
//! Spatial denoising filters for grayscale images corrupted by Gaussian or
//! impulse (salt-and-pepper) noise.
//!
//! Each output pixel is a statistic of the square window around it:
//!
//! - **Arithmetic mean** and **geometric mean**: smoothing for Gaussian noise
//! - **Median**: impulse noise removal
//! - **Local noise reduction**: variance-adaptive smoothing driven by a known
//!   global noise variance
//! - **Adaptive median**: median filtering whose window grows until the median
//!   is no longer an impulse, keeping uncorrupted pixels untouched
//!
//! ## Example Usage
//!
//! ```no_run
//! use imageops_denoise::{FilterConfig, FilterKind, Image, SpatialDenoise};
//! use image::Luma;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let noisy: Image<Luma<u8>> = Image::new(64, 64);
//!
//! let config = FilterConfig::new(FilterKind::AdaptiveMedian, 3)?.with_max_window_size(9)?;
//! let restored = noisy.denoise(&config)?;
//!
//! let config = FilterConfig::from_name("local_noise", 5, Some(100.0))?;
//! let smoothed = noisy.denoise(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `rayon`: filters image rows in parallel

mod denoise;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use denoise::adaptive_median::{adaptive_median, AdaptiveMedian, AdaptiveStage};
pub use denoise::config::{FilterConfig, FilterKind, DEFAULT_MAX_WINDOW_SIZE};
pub use denoise::filtering::{filter, SpatialDenoise};
pub use denoise::padding::{PaddedImage, ZeroPadding};
pub use denoise::statistics;
pub use denoise::window;
pub use error::DenoiseError;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

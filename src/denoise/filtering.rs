use crate::denoise::adaptive_median::adaptive_median_with_buffer;
use crate::denoise::config::{FilterConfig, FilterKind};
use crate::denoise::padding::{PaddedImage, ZeroPadding};
use crate::denoise::statistics::{arithmetic_mean, geometric_mean, local_noise, median};
use crate::denoise::window::extract_into;
use crate::error::DenoiseError;
use crate::utils::{clamp_f32_to_primitive, validate_non_empty_image};
use crate::Image;
use image::{ImageBuffer, Luma};
use itertools::Itertools;
use log::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Spatial denoising trait
///
/// Replaces every pixel with a statistic of its square neighborhood. The
/// image is zero padded so that border pixels see full-size windows, and the
/// output always has the same dimensions as the input.
///
/// This implementation supports:
/// - Floating-point grayscale images (`Image<Luma<f32>>`), filtered as is
/// - 8-bit grayscale images (`Image<Luma<u8>>`), rounded and clamped back to 0..=255
///
/// # Examples
///
/// ```rust
/// use imageops_denoise::{FilterConfig, FilterKind, SpatialDenoise};
/// use image::{ImageBuffer, Luma};
///
/// let mut image = ImageBuffer::from_pixel(5, 5, Luma([0u8]));
/// image.put_pixel(2, 2, Luma([255u8]));
///
/// let config = FilterConfig::new(FilterKind::Median, 3).unwrap();
/// let denoised = image.denoise(&config).unwrap();
/// assert_eq!(denoised.get_pixel(2, 2), &Luma([0u8]));
/// ```
pub trait SpatialDenoise {
    /// Filtered image type
    type Output;

    /// Applies the filter described by `config`
    ///
    /// # Errors
    ///
    /// * `DenoiseError::EmptyImage` - If the image has zero width or height
    /// * `DenoiseError::InvalidWindowSize` / `DenoiseError::MissingNoiseVariance` -
    ///   If the configuration is incomplete
    /// * `DenoiseError::WindowOutOfBounds` - If the padding does not cover a
    ///   requested window (internal invariant)
    fn denoise(&self, config: &FilterConfig) -> Result<Self::Output, DenoiseError>;
}

impl SpatialDenoise for Image<Luma<f32>> {
    type Output = Self;

    fn denoise(&self, config: &FilterConfig) -> Result<Self::Output, DenoiseError> {
        filter(self, config)
    }
}

impl SpatialDenoise for Image<Luma<u8>> {
    type Output = Self;

    fn denoise(&self, config: &FilterConfig) -> Result<Self::Output, DenoiseError> {
        let (width, height) = self.dimensions();
        let source: Image<Luma<f32>> = ImageBuffer::from_fn(width, height, |x, y| {
            Luma([f32::from(self.get_pixel(x, y)[0])])
        });

        let filtered = filter(&source, config)?;

        let mut output: Self = ImageBuffer::new(width, height);
        for (dst, src) in output.pixels_mut().zip_eq(filtered.pixels()) {
            *dst = Luma([clamp_f32_to_primitive::<u8>(src[0].round())]);
        }
        Ok(output)
    }
}

/// Filters `image` with the statistic selected by `config`
///
/// The configuration is validated before any pixel is touched, so an error
/// never comes with a partially filtered image.
///
/// # Errors
///
/// * `DenoiseError::EmptyImage` - If the image has zero width or height
/// * `DenoiseError::InvalidWindowSize` / `DenoiseError::MissingNoiseVariance` -
///   If the configuration is incomplete
/// * `DenoiseError::WindowOutOfBounds` - If the padding does not cover a
///   requested window (internal invariant)
pub fn filter(
    image: &Image<Luma<f32>>,
    config: &FilterConfig,
) -> Result<Image<Luma<f32>>, DenoiseError> {
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height)?;
    config.validate()?;

    let pad = config.required_padding();
    let padded = image.zero_pad(pad);
    debug!(
        "filtering {width}x{height} image with {} (size {}, pad {pad})",
        config.kind(),
        config.filter_size()
    );

    let mut output: Image<Luma<f32>> = ImageBuffer::new(width, height);

    #[cfg(feature = "rayon")]
    output
        .par_chunks_mut(width as usize)
        .enumerate()
        .try_for_each(|(y, row)| filter_row(&padded, config, y as u32, row))?;

    #[cfg(not(feature = "rayon"))]
    output
        .chunks_mut(width as usize)
        .enumerate()
        .try_for_each(|(y, row)| filter_row(&padded, config, y as u32, row))?;

    debug!("finished {} pass over {width}x{height} image", config.kind());

    Ok(output)
}

/// Filters output row `y` into `row`
fn filter_row(
    padded: &PaddedImage,
    config: &FilterConfig,
    y: u32,
    row: &mut [f32],
) -> Result<(), DenoiseError> {
    let pad = padded.pad();
    let size = config.filter_size();
    let mut window = Vec::with_capacity(size as usize * size as usize);

    for (x, out) in (0u32..).zip(row.iter_mut()) {
        let (center_x, center_y) = (x + pad, y + pad);

        *out = match config.kind() {
            FilterKind::ArithmeticMean => {
                extract_into(padded, center_x, center_y, size, &mut window)?;
                arithmetic_mean(&window)
            }
            FilterKind::GeometricMean => {
                extract_into(padded, center_x, center_y, size, &mut window)?;
                geometric_mean(&window)
            }
            FilterKind::LocalNoise => {
                extract_into(padded, center_x, center_y, size, &mut window)?;
                local_noise(
                    &window,
                    padded.value(center_x, center_y),
                    config.noise_variance().unwrap_or_default(),
                )
            }
            FilterKind::Median => {
                extract_into(padded, center_x, center_y, size, &mut window)?;
                median(&mut window)
            }
            FilterKind::AdaptiveMedian => {
                adaptive_median_with_buffer(
                    padded,
                    center_x,
                    center_y,
                    size,
                    config.max_window_size(),
                    &mut window,
                )?
                .value
            }
        };
    }

    Ok(())
}

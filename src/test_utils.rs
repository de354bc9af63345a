//! Test utilities for imageops-denoise
//!
//! This module provides common fixtures for testing the filters.
//! It is only compiled when running tests.

use crate::Image;
use image::{ImageBuffer, Luma};

/// Creates a `width` x `height` image filled with `background` and a single
/// impulse of value `spike` at the center pixel.
pub fn create_impulse_image(width: u32, height: u32, background: f32, spike: f32) -> Image<Luma<f32>> {
    let mut image = ImageBuffer::from_pixel(width, height, Luma([background]));
    image.put_pixel(width / 2, height / 2, Luma([spike]));
    image
}

/// Compares two images pixel by pixel with a tolerance for floating-point errors.
///
/// # Returns
/// `true` if all pixels are within tolerance and dimensions match, `false` otherwise
pub fn images_approx_equal(
    expected: &Image<Luma<f32>>,
    actual: &Image<Luma<f32>>,
    tolerance: f32,
) -> bool {
    expected.dimensions() == actual.dimensions()
        && expected
            .pixels()
            .zip(actual.pixels())
            .all(|(e, a)| (e[0] - a[0]).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_impulse_image_places_spike_at_center() {
        let image = create_impulse_image(5, 3, 10.0, 255.0);
        assert_eq!(image.dimensions(), (5, 3));
        assert_eq!(image.get_pixel(2, 1), &Luma([255.0]));
        assert_eq!(image.get_pixel(0, 0), &Luma([10.0]));
        assert_eq!(image.pixels().filter(|p| p[0] == 255.0).count(), 1);
    }

    #[test]
    fn images_approx_equal_with_tolerant_comparison_returns_true() {
        let image1 = create_impulse_image(3, 3, 0.0, 100.0);
        let mut image2 = image1.clone();
        image2.put_pixel(0, 0, Luma([1.0]));

        assert!(images_approx_equal(&image1, &image2, 1.5));
        assert!(!images_approx_equal(&image1, &image2, 0.5));
        assert!(!images_approx_equal(
            &image1,
            &create_impulse_image(3, 2, 0.0, 100.0),
            1.5
        ));
    }
}

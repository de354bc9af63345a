//! Internal utility functions for imageops-denoise.
//!
//! This module contains common functionality used across the filters.

use crate::error::DenoiseError;
use image::Primitive;
use imageproc::definitions::Clamp;

/// Clamps a floating-point value to the range of a primitive type.
///
/// # Arguments
///
/// * `value` - The floating-point value to clamp
///
/// # Returns
///
/// The clamped value as the target primitive type
#[inline]
pub fn clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value)
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `DenoiseError::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), DenoiseError> {
    if width == 0 || height == 0 {
        Err(DenoiseError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

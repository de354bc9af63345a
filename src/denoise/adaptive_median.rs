use crate::denoise::padding::PaddedImage;
use crate::denoise::statistics::{median, min_max};
use crate::denoise::window::extract_into;
use crate::error::DenoiseError;
use log::trace;

/// How the adaptive median procedure reached its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveStage {
    /// The median was strictly between the window extremes and so was the
    /// center pixel, which is kept as is
    CenterKept,
    /// The median was strictly between the window extremes but the center
    /// pixel was one of them, so it was replaced by the median
    CenterReplaced,
    /// The window hit the maximum size without the median leaving the
    /// extremes; the median of the largest window is used
    MaxWindowReached,
}

/// Result of the adaptive median procedure for one pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveMedian {
    /// Output intensity
    pub value: f32,
    /// Window size used for the final decision
    pub window_size: u32,
    /// Number of times the window grew by 2
    pub growth_steps: u32,
    pub stage: AdaptiveStage,
}

/// Runs the adaptive median procedure for the pixel at padded coordinates
/// `(center_x, center_y)`.
///
/// The window starts at `initial_size` and grows by 2 while its median is
/// one of its own extremes (level test), up to `max_size`. Once the median
/// passes, the center pixel is kept if it is not an extreme and replaced by
/// the median otherwise. If `initial_size` already exceeds `max_size` the
/// median of the initial window is returned directly.
///
/// The padding of `padded` must be at least `max(initial_size, max_size) / 2`.
///
/// # Errors
///
/// * `DenoiseError::WindowOutOfBounds` - If the padding is too small for the
///   windows the procedure needs
pub fn adaptive_median(
    padded: &PaddedImage,
    center_x: u32,
    center_y: u32,
    initial_size: u32,
    max_size: u32,
) -> Result<AdaptiveMedian, DenoiseError> {
    let mut window = Vec::new();
    adaptive_median_with_buffer(padded, center_x, center_y, initial_size, max_size, &mut window)
}

pub(crate) fn adaptive_median_with_buffer(
    padded: &PaddedImage,
    center_x: u32,
    center_y: u32,
    initial_size: u32,
    max_size: u32,
    window: &mut Vec<f32>,
) -> Result<AdaptiveMedian, DenoiseError> {
    let center = padded.value(center_x, center_y);
    let mut size = initial_size;
    let mut growth_steps = 0;

    if size > max_size {
        extract_into(padded, center_x, center_y, size, window)?;
        return Ok(AdaptiveMedian {
            value: median(window),
            window_size: size,
            growth_steps,
            stage: AdaptiveStage::MaxWindowReached,
        });
    }

    loop {
        extract_into(padded, center_x, center_y, size, window)?;
        let (z_min, z_max) = min_max(window);
        let z_med = median(window);

        // Level test: is the median itself an impulse?
        if z_med > z_min && z_med < z_max {
            let (value, stage) = if center > z_min && center < z_max {
                (center, AdaptiveStage::CenterKept)
            } else {
                (z_med, AdaptiveStage::CenterReplaced)
            };
            return Ok(AdaptiveMedian {
                value,
                window_size: size,
                growth_steps,
                stage,
            });
        }

        if max_size - size < 2 {
            return Ok(AdaptiveMedian {
                value: z_med,
                window_size: size,
                growth_steps,
                stage: AdaptiveStage::MaxWindowReached,
            });
        }

        size += 2;
        growth_steps += 1;
        trace!("adaptive median at ({center_x}, {center_y}) grew window to {size}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denoise::padding::ZeroPadding;
    use crate::Image;
    use image::{ImageBuffer, Luma};

    fn padded_from(width: u32, height: u32, data: Vec<f32>, pad: u32) -> PaddedImage {
        let image: Image<Luma<f32>> = ImageBuffer::from_raw(width, height, data).unwrap();
        image.zero_pad(pad)
    }

    #[test]
    fn keeps_uncorrupted_center() {
        // median 50 lies strictly between 10 and 90, center 40 too
        let padded = padded_from(
            3,
            3,
            vec![10.0, 20.0, 30.0, 60.0, 40.0, 70.0, 80.0, 90.0, 50.0],
            1,
        );
        let result = adaptive_median(&padded, 2, 2, 3, 3).unwrap();

        assert_eq!(result.value, 40.0);
        assert_eq!(result.stage, AdaptiveStage::CenterKept);
        assert_eq!(result.growth_steps, 0);
    }

    #[test]
    fn replaces_center_at_maximum() {
        let padded = padded_from(
            3,
            3,
            vec![10.0, 20.0, 30.0, 60.0, 255.0, 70.0, 80.0, 90.0, 50.0],
            1,
        );
        let result = adaptive_median(&padded, 2, 2, 3, 3).unwrap();

        assert_eq!(result.value, 60.0);
        assert_eq!(result.stage, AdaptiveStage::CenterReplaced);
    }

    #[test]
    fn replaces_center_at_minimum() {
        let padded = padded_from(
            3,
            3,
            vec![10.0, 20.0, 30.0, 60.0, 0.0, 70.0, 80.0, 90.0, 50.0],
            1,
        );
        let result = adaptive_median(&padded, 2, 2, 3, 3).unwrap();

        assert_eq!(result.value, 50.0);
        assert_eq!(result.stage, AdaptiveStage::CenterReplaced);
    }

    #[test]
    fn grows_window_until_median_leaves_extremes() {
        // 5x5 image: inner 3x3 is all salt, outer ring varies
        let mut data = vec![0.0; 25];
        for (i, value) in data.iter_mut().enumerate() {
            let (x, y) = (i % 5, i / 5);
            *value = if (1..4).contains(&x) && (1..4).contains(&y) {
                255.0
            } else {
                (i as f32) * 4.0
            };
        }
        let padded = padded_from(5, 5, data, 2);
        let result = adaptive_median(&padded, 4, 4, 3, 5).unwrap();

        assert_eq!(result.window_size, 5);
        assert_eq!(result.growth_steps, 1);
        assert_ne!(result.value, 255.0);
        assert_eq!(result.stage, AdaptiveStage::CenterReplaced);
    }

    #[test]
    fn flat_region_stops_at_maximum_window() {
        let padded = padded_from(7, 7, vec![128.0; 49], 3);
        let result = adaptive_median(&padded, 6, 6, 3, 7).unwrap();

        assert_eq!(result.value, 128.0);
        assert_eq!(result.window_size, 7);
        assert_eq!(result.growth_steps, 2);
        assert_eq!(result.stage, AdaptiveStage::MaxWindowReached);
    }

    #[test]
    fn initial_size_above_maximum_returns_plain_median() {
        let padded = padded_from(
            3,
            3,
            vec![10.0, 20.0, 30.0, 60.0, 40.0, 70.0, 80.0, 90.0, 50.0],
            2,
        );
        let result = adaptive_median(&padded, 3, 3, 3, 1).unwrap();

        assert_eq!(result.value, 50.0);
        assert_eq!(result.window_size, 3);
        assert_eq!(result.growth_steps, 0);
    }

    #[test]
    fn insufficient_padding_is_reported() {
        let padded = padded_from(3, 3, vec![0.0; 9], 1);
        assert!(matches!(
            adaptive_median(&padded, 1, 1, 3, 7),
            Err(DenoiseError::WindowOutOfBounds { size: 5, .. })
        ));
    }

    #[test]
    fn huge_max_size_reports_bounds_violation() {
        let padded = padded_from(3, 3, vec![9.0; 9], 1);
        assert!(matches!(
            adaptive_median(&padded, 2, 2, 3, 65537),
            Err(DenoiseError::WindowOutOfBounds { size: 7, .. })
        ));
    }
}

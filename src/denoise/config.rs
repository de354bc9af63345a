use crate::error::DenoiseError;
use std::fmt;
use std::str::FromStr;

/// Default upper bound on adaptive median window growth
pub const DEFAULT_MAX_WINDOW_SIZE: u32 = 15;

/// Statistic used to collapse a window into one output intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Arithmetic mean of the window
    ArithmeticMean,
    /// Geometric mean of the window
    GeometricMean,
    /// Adaptive local noise reduction driven by a global noise variance
    LocalNoise,
    /// Median of the window
    Median,
    /// Median filter that grows its window until the median is not an impulse
    AdaptiveMedian,
}

impl FilterKind {
    /// All filter kinds, in declaration order
    pub const ALL: [Self; 5] = [
        Self::ArithmeticMean,
        Self::GeometricMean,
        Self::LocalNoise,
        Self::Median,
        Self::AdaptiveMedian,
    ];

    /// Snake-case name accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArithmeticMean => "arithmetic_mean",
            Self::GeometricMean => "geometric_mean",
            Self::LocalNoise => "local_noise",
            Self::Median => "median",
            Self::AdaptiveMedian => "adaptive_median",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = DenoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DenoiseError::UnknownFilter(s.to_owned()))
    }
}

/// Immutable filter configuration
///
/// Built through [`FilterConfig::new`] and the `with_*` methods, each of
/// which validates eagerly so that an invalid combination never reaches
/// the filtering pass.
///
/// # Examples
///
/// ```rust
/// use imageops_denoise::{FilterConfig, FilterKind};
///
/// let config = FilterConfig::new(FilterKind::LocalNoise, 5)
///     .and_then(|c| c.with_noise_variance(0.01))
///     .unwrap();
/// assert_eq!(config.filter_size(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    kind: FilterKind,
    filter_size: u32,
    noise_variance: Option<f32>,
    max_window_size: u32,
}

impl FilterConfig {
    /// Creates a configuration for `kind` with a `filter_size` x `filter_size` window.
    ///
    /// # Errors
    ///
    /// * `DenoiseError::InvalidWindowSize` - If `filter_size` is zero or even
    ///
    /// The noise variance required by local noise reduction is checked by
    /// [`FilterConfig::validate`], which the filtering pass calls up front.
    pub fn new(kind: FilterKind, filter_size: u32) -> Result<Self, DenoiseError> {
        validate_window_size(filter_size)?;
        Ok(Self {
            kind,
            filter_size,
            noise_variance: None,
            max_window_size: DEFAULT_MAX_WINDOW_SIZE,
        })
    }

    /// Builds a complete configuration from a filter name, window size and
    /// optional global noise variance.
    ///
    /// # Errors
    ///
    /// * `DenoiseError::UnknownFilter` - If `name` is not a known filter
    /// * `DenoiseError::InvalidWindowSize` - If `filter_size` is zero or even
    /// * `DenoiseError::InvalidNoiseVariance` - If the variance is negative or not finite
    /// * `DenoiseError::MissingNoiseVariance` - If `local_noise` is requested without a variance
    pub fn from_name(
        name: &str,
        filter_size: u32,
        noise_variance: Option<f32>,
    ) -> Result<Self, DenoiseError> {
        let config = Self::new(name.parse()?, filter_size)?;
        let config = match noise_variance {
            Some(variance) => config.with_noise_variance(variance)?,
            None => config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the global noise variance used by local noise reduction.
    pub fn with_noise_variance(mut self, variance: f32) -> Result<Self, DenoiseError> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(DenoiseError::InvalidNoiseVariance { variance });
        }
        self.noise_variance = Some(variance);
        Ok(self)
    }

    /// Overrides the upper bound on adaptive median window growth.
    pub fn with_max_window_size(mut self, size: u32) -> Result<Self, DenoiseError> {
        if size == 0 || size % 2 == 0 {
            return Err(DenoiseError::InvalidMaxWindowSize { size });
        }
        self.max_window_size = size;
        Ok(self)
    }

    /// Checks that every parameter the selected filter needs is present.
    pub fn validate(&self) -> Result<(), DenoiseError> {
        validate_window_size(self.filter_size)?;
        if self.kind == FilterKind::LocalNoise && self.noise_variance.is_none() {
            return Err(DenoiseError::MissingNoiseVariance {
                filter: self.kind.name(),
            });
        }
        Ok(())
    }

    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    pub const fn filter_size(&self) -> u32 {
        self.filter_size
    }

    pub const fn noise_variance(&self) -> Option<f32> {
        self.noise_variance
    }

    pub const fn max_window_size(&self) -> u32 {
        self.max_window_size
    }

    /// Border width needed so that every window this configuration can
    /// request stays inside the padded image.
    pub fn required_padding(&self) -> u32 {
        match self.kind {
            FilterKind::AdaptiveMedian => self.filter_size.max(self.max_window_size) / 2,
            _ => self.filter_size / 2,
        }
    }
}

fn validate_window_size(size: u32) -> Result<(), DenoiseError> {
    if size == 0 || size % 2 == 0 {
        Err(DenoiseError::InvalidWindowSize { size })
    } else {
        Ok(())
    }
}

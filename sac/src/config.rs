use nalgebra::RealField;

use crate::{error::ConfigError, sampler::check_sample_size, SacError};

/// Tuning parameters of a RANSAC line fit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RansacConfig<T> {
    pub max_iterations: usize,
    /// Maximum perpendicular distance of a point still counted as an inlier.
    pub threshold: T,
    /// Size of the random subset drawn each iteration.
    pub sample_size: usize,
}

impl<T> RansacConfig<T> {
    pub fn new(max_iterations: usize, threshold: T, sample_size: usize) -> Self {
        RansacConfig {
            max_iterations,
            threshold,
            sample_size,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: T) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

impl<T: RealField + Copy> RansacConfig<T> {
    /// Checks the configuration against a point set of `point_count` points.
    pub fn validate(&self, point_count: usize) -> Result<(), SacError> {
        if point_count == 0 {
            return Err(ConfigError::EmptyPoints.into());
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations.into());
        }
        // Also rejects NaN.
        if !(self.threshold >= T::zero()) {
            return Err(ConfigError::InvalidThreshold.into());
        }
        check_sample_size(point_count, self.sample_size)
    }
}

impl<T: RealField + Copy> Default for RansacConfig<T> {
    fn default() -> Self {
        RansacConfig {
            max_iterations: 1000,
            threshold: nalgebra::convert(0.5f64),
            sample_size: 2,
        }
    }
}

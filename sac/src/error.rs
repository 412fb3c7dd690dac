use thiserror::Error;

/// The reason a fitting configuration was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the point set is empty")]
    EmptyPoints,
    #[error("the maximum iteration count must be positive")]
    ZeroIterations,
    #[error("sample size {0} is below the 2 points needed to determine a line")]
    SampleSizeTooSmall(usize),
    #[error("sample size {sample_size} exceeds the {point_count} available points")]
    SampleSizeTooLarge {
        sample_size: usize,
        point_count: usize,
    },
    #[error("the inlier threshold must be a non-negative number")]
    InvalidThreshold,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SacError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

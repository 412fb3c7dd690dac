//! Robust fitting of 2D lines with RANSAC.
//!
//! ```ignore
//! let points = [Point2::new(0., 1.), Point2::new(1., 3.), Point2::new(2., 5.)];
//! let line = rsac_sac::calc(&points, 100, 0.5, 2)?;
//! println!("{line}");
//! ```

mod base;
mod config;
mod error;
mod inlier;
mod line;
mod sampler;

pub use self::{
    base::{calc, IterationRecord, Ransac2D, RansacFit},
    config::RansacConfig,
    error::{ConfigError, SacError},
    inlier::{mean_distance, InlierFilter},
    line::{Line2, LineEstimator},
    sampler::Sampler,
};

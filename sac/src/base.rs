use nalgebra::RealField;
use num::ToPrimitive;
use rand::{rngs::ThreadRng, RngCore};
use rsac_common::{filter::Filter, point::Point2};
use sample_consensus::Consensus;

use crate::{
    config::RansacConfig,
    inlier::{mean_distance, InlierFilter},
    line::{Line2, LineEstimator},
    sampler::Sampler,
    SacError,
};

/// What one fitting round produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord<T> {
    /// Score of the refined model of this round.
    pub score: T,
    /// Best score retained after this round.
    pub best_score: T,
    pub improved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RansacFit<T> {
    pub model: Line2<T>,
    /// Mean perpendicular distance of all points to `model`, `+inf` if no
    /// round produced a comparable score.
    pub score: T,
    /// Partition of the point set against `model` and the configured
    /// threshold.
    pub inliers: Vec<usize>,
    pub outliers: Vec<usize>,
}

/// Fits `y = a * x + b` to a point set with outliers.
///
/// Each round shuffles the point indices, estimates a rough line from the
/// leading sample, classifies all points against it, estimates a refined line
/// from the inliers and keeps the refined line if its mean distance to the
/// whole set is strictly below the best so far.
pub struct Ransac2D<T, R: RngCore = ThreadRng> {
    pub config: RansacConfig<T>,
    pub rng: R,
}

impl<T> Ransac2D<T, ThreadRng> {
    pub fn new(config: RansacConfig<T>) -> Self {
        Ransac2D {
            config,
            rng: rand::rng(),
        }
    }
}

impl<T, R: RngCore> Ransac2D<T, R> {
    pub fn with_rng(config: RansacConfig<T>, rng: R) -> Self {
        Ransac2D { config, rng }
    }
}

impl<T: RealField + Copy, R: RngCore> Ransac2D<T, R> {
    /// Runs the configured number of rounds, reporting each one to
    /// `on_round`, and returns the best model with its score.
    fn search<F>(
        &mut self,
        points: &[Point2<T>],
        mut on_round: F,
    ) -> Result<(Line2<T>, T), SacError>
    where
        F: FnMut(IterationRecord<T>),
    {
        self.config.validate(points.len())?;
        let RansacConfig {
            max_iterations,
            threshold,
            sample_size,
        } = self.config;

        let mut sampler = Sampler::new(points.len(), sample_size)?;
        let mut best_model = Line2::zero();
        let mut best_score = nalgebra::convert::<f64, T>(f64::INFINITY);

        for iteration in 0..max_iterations {
            let sample = sampler.draw(&mut self.rng);
            let rough = LineEstimator::estimate_sample(points, sample, &mut self.rng);

            let (inliers, outliers) =
                InlierFilter::new(rough, threshold).filter_all_indices(points);
            let refined =
                LineEstimator::estimate_random(points, &inliers, &mut self.rng).unwrap_or(rough);

            let score = mean_distance(points, &refined);
            let improved = score < best_score;
            if improved {
                best_model = refined;
                best_score = score;
                log::debug!(
                    "iteration {iteration}: best model improved to {:?} (score {:?})",
                    best_model,
                    best_score,
                );
            }
            log::trace!(
                "iteration {iteration}: {} inliers, {} outliers, score {:?}",
                inliers.len(),
                outliers.len(),
                score,
            );

            on_round(IterationRecord {
                score,
                best_score,
                improved,
            });
        }

        if !best_score.is_finite() {
            log::warn!(
                "no finite score in {max_iterations} iterations over {} points, returning {:?}",
                points.len(),
                best_model,
            );
        }
        Ok((best_model, best_score))
    }

    fn report(&self, points: &[Point2<T>], model: Line2<T>, score: T) -> RansacFit<T> {
        let (inliers, outliers) =
            InlierFilter::new(model, self.config.threshold).filter_all_indices(points);
        log::debug!(
            "fit finished: {:?} with score {:?}, {} of {} points are inliers",
            model,
            score,
            inliers.len(),
            points.len(),
        );
        RansacFit {
            model,
            score,
            inliers,
            outliers,
        }
    }

    /// Runs the configured number of rounds over `points` and partitions them
    /// against the best model.
    pub fn fit(&mut self, points: &[Point2<T>]) -> Result<RansacFit<T>, SacError> {
        let (model, score) = self.search(points, |_| {})?;
        Ok(self.report(points, model, score))
    }

    /// Like [`Ransac2D::fit`], also returning one record per round.
    pub fn fit_traced(
        &mut self,
        points: &[Point2<T>],
    ) -> Result<(RansacFit<T>, Vec<IterationRecord<T>>), SacError> {
        let mut trace = Vec::new();
        let (model, score) = self.search(points, |record| trace.push(record))?;
        Ok((self.report(points, model, score), trace))
    }

    pub fn calc(&mut self, points: &[Point2<T>]) -> Result<Line2<T>, SacError> {
        self.search(points, |_| {}).map(|(model, _)| model)
    }
}

/// Fits a line to `points` with a fresh thread-local random source.
pub fn calc<T: RealField + Copy>(
    points: &[Point2<T>],
    max_iterations: usize,
    threshold: T,
    sample_size: usize,
) -> Result<Line2<T>, SacError> {
    Ransac2D::new(RansacConfig::new(max_iterations, threshold, sample_size)).calc(points)
}

impl<T, R> Consensus<LineEstimator, Point2<T>> for Ransac2D<T, R>
where
    T: RealField + Copy + ToPrimitive,
    R: RngCore,
{
    type Inliers = Vec<usize>;

    fn model<I>(&mut self, estimator: &LineEstimator, data: I) -> Option<Line2<T>>
    where
        I: Iterator<Item = Point2<T>> + Clone,
    {
        self.model_inliers(estimator, data).map(|(model, _)| model)
    }

    fn model_inliers<I>(
        &mut self,
        _estimator: &LineEstimator,
        data: I,
    ) -> Option<(Line2<T>, Self::Inliers)>
    where
        I: Iterator<Item = Point2<T>> + Clone,
    {
        let points = data.collect::<Vec<_>>();
        match self.fit(&points) {
            Ok(fit) => Some((fit.model, fit.inliers)),
            Err(err) => {
                log::debug!("line consensus skipped: {err}");
                None
            }
        }
    }
}

use nalgebra::RealField;
use rsac_common::{filter::Filter, point::Point2};

use crate::line::Line2;

/// Splits a point set into the points within `threshold` of a line and the
/// rest.
///
/// A point whose distance is NaN (the line is degenerate) is kept as an inlier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InlierFilter<T> {
    pub model: Line2<T>,
    pub threshold: T,
}

impl<T> InlierFilter<T> {
    pub fn new(model: Line2<T>, threshold: T) -> Self {
        InlierFilter { model, threshold }
    }
}

impl<T: RealField + Copy> InlierFilter<T> {
    /// The inlier test against the current model, for one point at a time.
    fn predicate(&self) -> impl FnMut(&Point2<T>) -> bool {
        let InlierFilter { model, threshold } = *self;
        let norm = model.norm();
        move |point: &Point2<T>| !(threshold < model.distance_normed(point, norm))
    }
}

impl<T: RealField + Copy> Filter<[Point2<T>]> for InlierFilter<T> {
    fn filter_indices(&mut self, input: &[Point2<T>]) -> Vec<usize> {
        self.predicate().filter_indices(input)
    }

    fn filter_all_indices(&mut self, input: &[Point2<T>]) -> (Vec<usize>, Vec<usize>) {
        self.predicate().filter_all_indices(input)
    }
}

/// The mean perpendicular distance of `points` to `model`, the score a
/// candidate is ranked by. Lower is better.
///
/// NaN for an empty point set.
pub fn mean_distance<T: RealField + Copy>(points: &[Point2<T>], model: &Line2<T>) -> T {
    let norm = model.norm();
    let sum = { points.iter() }.fold(T::zero(), |acc, point| {
        acc + model.distance_normed(point, norm)
    });
    sum / nalgebra::convert::<f64, T>(points.len() as f64)
}

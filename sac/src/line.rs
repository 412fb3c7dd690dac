use std::fmt;

use nalgebra::RealField;
use num::ToPrimitive;
use rand::{seq::index, RngCore};
use rsac_common::point::Point2;
use sample_consensus::{Estimator, Model};

/// The line `y = slope * x + intercept`.
///
/// Vertical lines have no representation; estimating one yields a non-finite
/// slope that propagates through every distance computed from it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Line2<T> {
    pub slope: T,
    pub intercept: T,
}

impl<T> Line2<T> {
    #[inline]
    pub const fn new(slope: T, intercept: T) -> Self {
        Line2 { slope, intercept }
    }
}

impl<T: RealField + Copy> Line2<T> {
    #[inline]
    pub fn zero() -> Self {
        Line2::new(T::zero(), T::zero())
    }

    /// The line through `a` and `b`. Not checked for `a.x == b.x`.
    pub fn through(a: &Point2<T>, b: &Point2<T>) -> Self {
        let slope = (b.y - a.y) / (b.x - a.x);
        let intercept = a.y - slope * a.x;
        Line2 { slope, intercept }
    }

    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// `sqrt(slope² + 1)`, the denominator of the perpendicular distance.
    #[inline]
    pub(crate) fn norm(&self) -> T {
        (self.slope * self.slope + T::one()).sqrt()
    }

    #[inline]
    pub(crate) fn distance_normed(&self, point: &Point2<T>, norm: T) -> T {
        (point.y - self.slope * point.x - self.intercept).abs() / norm
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance(&self, point: &Point2<T>) -> T {
        self.distance_normed(point, self.norm())
    }

    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

impl<T: fmt::Display> fmt::Display for Line2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x + {}", self.slope, self.intercept)
    }
}

impl<T: RealField + Copy + ToPrimitive> Model<Point2<T>> for Line2<T> {
    fn residual(&self, data: &Point2<T>) -> f64 {
        self.distance(data).to_f64().unwrap_or(f64::NAN)
    }
}

pub struct LineEstimator;

impl LineEstimator {
    /// Estimates a line from two distinct random positions of `sample`,
    /// ignoring the rest. `sample` holds at least two indices, as every
    /// [`Sampler`](crate::Sampler) draw does.
    pub fn estimate_sample<T, R>(points: &[Point2<T>], sample: &[usize], rng: &mut R) -> Line2<T>
    where
        T: RealField + Copy,
        R: RngCore + ?Sized,
    {
        let picked = index::sample(rng, sample.len(), 2);
        let a = &points[sample[picked.index(0)]];
        let b = &points[sample[picked.index(1)]];
        Line2::through(a, b)
    }

    /// Like [`LineEstimator::estimate_sample`] for an arbitrary index list.
    /// `None` if fewer than two indices are given.
    pub fn estimate_random<T, R>(
        points: &[Point2<T>],
        indices: &[usize],
        rng: &mut R,
    ) -> Option<Line2<T>>
    where
        T: RealField + Copy,
        R: RngCore + ?Sized,
    {
        (indices.len() >= 2).then(|| Self::estimate_sample(points, indices, rng))
    }
}

impl<T: RealField + Copy + ToPrimitive> Estimator<Point2<T>> for LineEstimator {
    type Model = Line2<T>;

    type ModelIter = Option<Line2<T>>;

    const MIN_SAMPLES: usize = 2;

    fn estimate<I>(&self, mut data: I) -> Self::ModelIter
    where
        I: Iterator<Item = Point2<T>> + Clone,
    {
        match (data.next(), data.next()) {
            (Some(a), Some(b)) => Some(Line2::through(&a, &b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rsac_common::point::Point2;
    use sample_consensus::{Estimator, Model};

    use super::{Line2, LineEstimator};

    #[test]
    fn test_through() {
        let line = Line2::through(&Point2::new(1., 3.), &Point2::new(3., 7.));
        assert_eq!(line, Line2::new(2., 1.));
        assert_eq!(line.evaluate(10.), 21.);
        assert_eq!(line.to_string(), "y = 2x + 1");
    }

    #[test]
    fn test_distance() {
        let line = Line2::new(1f64, 0.);
        let distance = line.distance(&Point2::new(0., 2.));
        assert!((distance - 2f64.sqrt()).abs() < 1e-12);

        let horizontal = Line2::new(0f32, 1.);
        assert_eq!(horizontal.distance(&Point2::new(5., -2.)), 3.);
    }

    #[test]
    fn test_vertical_pair() {
        let line = Line2::through(&Point2::new(2f64, 1.), &Point2::new(2., 5.));
        assert!(!line.slope.is_finite());
        assert!(!line.is_finite());

        let same = Line2::through(&Point2::new(2f64, 1.), &Point2::new(2., 1.));
        assert!(same.slope.is_nan());

        // Must not panic, only produce non-finite values.
        let distance = line.distance(&Point2::new(0., 0.));
        assert!(!distance.is_finite());
        assert!(!(distance < f64::INFINITY));
    }

    #[test]
    fn test_estimate_random() {
        let points = [
            Point2::new(0f64, 1.),
            Point2::new(1., 3.),
            Point2::new(2., 5.),
            Point2::new(3., 7.),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let line = LineEstimator::estimate_random(&points, &[0, 1, 2, 3], &mut rng).unwrap();
            assert!((line.slope - 2.).abs() < 1e-12);
            assert!((line.intercept - 1.).abs() < 1e-12);
        }
        assert!(LineEstimator::estimate_random(&points, &[2], &mut rng).is_none());
        assert!(LineEstimator::estimate_random(&points, &[], &mut rng).is_none());
    }

    #[test]
    fn test_estimate_random_distinct() {
        // Picking the same position twice would give a NaN slope.
        let points = [Point2::new(0f32, 0.), Point2::new(1., 1.)];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let line = LineEstimator::estimate_random(&points, &[0, 1], &mut rng).unwrap();
            assert_eq!(line, Line2::new(1., 0.));
        }
    }

    #[test]
    fn test_estimate_sample() {
        let points = [
            Point2::new(0f64, 1.),
            Point2::new(5., 40.),
            Point2::new(2., 5.),
            Point2::new(3., 7.),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            // Index 1 is off the line and never part of the sample.
            let line = LineEstimator::estimate_sample(&points, &[3, 0, 2], &mut rng);
            assert!((line.slope - 2.).abs() < 1e-12);
            assert!((line.intercept - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_consensus_estimator() {
        let points = vec![Point2::new(0f64, 1.), Point2::new(2., 5.), Point2::new(9., 9.)];
        let line = LineEstimator.estimate(points.into_iter()).unwrap();
        assert_eq!(line, Line2::new(2., 1.));
        assert_eq!(line.residual(&Point2::new(1., 3.)), 0.);

        let lonely = vec![Point2::new(0f64, 1.)];
        assert!(LineEstimator.estimate(lonely.into_iter()).is_none());
    }
}

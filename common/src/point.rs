/// A point on the plane. Generic over the coordinate type, which is `f32` or
/// `f64` in practice.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

//! 2D point type for vertex positions.

use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;

/// A 2D point representing a vertex position.
///
/// Points are compared by exact coordinate equality. Generic over
/// floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Squared distance from the origin, `x² + y²`.
    ///
    /// This is the lifting weight used by the in-circle test.
    #[inline]
    pub fn norm_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lexicographic comparison: by `x`, ties broken by `y`.
    ///
    /// This is the order triangulation input must be sorted in. NaN
    /// coordinates compare as equal.
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p: Point2<f64> = Point2::new(3.0, 4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 4.0);
    }

    #[test]
    fn test_norm_squared() {
        let p: Point2<f64> = Point2::new(3.0, 4.0);
        assert_eq!(p.norm_squared(), 25.0);
        assert_eq!(Point2::<f64>::origin().norm_squared(), 0.0);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance(b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lex_cmp() {
        let a: Point2<f64> = Point2::new(0.0, 5.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(1.0, 2.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(b.lex_cmp(&c), Ordering::Less);
        assert_eq!(c.lex_cmp(&b), Ordering::Greater);
        assert_eq!(c.lex_cmp(&c), Ordering::Equal);
    }

    #[test]
    fn test_exact_equality() {
        let a: Point2<f64> = Point2::new(0.1 + 0.2, 0.0);
        let b = Point2::new(0.3, 0.0);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, -2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_display() {
        let p: Point2<f64> = Point2::new(1.5, -2.0);
        assert_eq!(p.to_string(), "(1.5, -2)");
    }
}

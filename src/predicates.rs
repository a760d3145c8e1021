//! Orientation and in-circle predicates.
//!
//! These predicates evaluate plain floating-point determinants. There is no
//! tolerance and no exact-arithmetic fallback: every test is a strict `> 0`
//! comparison, so collinear and cocircular inputs report `false`. Results
//! near such degeneracies may be wrong by rounding, which can leave a
//! triangulation of near-degenerate input with inconsistent topology.
//!
//! # Example
//!
//! ```
//! use subdiv::predicates::{ccw, in_circle};
//! use subdiv::Point2;
//!
//! let a = Point2::new(0.0_f64, 0.0);
//! let b = Point2::new(1.0, 0.0);
//! let c = Point2::new(0.0, 1.0);
//!
//! assert!(ccw(a, b, c));
//! assert!(!ccw(a, c, b));
//!
//! assert!(in_circle(a, b, c, Point2::new(0.5, 0.5)));
//! assert!(!in_circle(a, b, c, Point2::new(2.0, 2.0)));
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Determinant of the 3×3 matrix with rows `(x, y, 1)` for `a`, `b`, `c`.
///
/// Equals twice the signed area of triangle `abc`: positive when the points
/// are counterclockwise, negative when clockwise, zero when collinear.
#[inline]
pub fn three_point_det<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x * c.y - c.x * b.y) - (a.x * c.y - c.x * a.y) + (a.x * b.y - b.x * a.y)
}

/// Returns true if `a`, `b`, `c` form a counterclockwise triangle.
#[inline]
pub fn ccw<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    three_point_det(a, b, c) > F::zero()
}

/// Returns true if `d` lies strictly inside the circle through `a`, `b`, `c`.
///
/// `a`, `b`, `c` must be counterclockwise; for a clockwise triple the result
/// is inverted (true when `d` lies outside). Points on the circle report
/// `false`.
///
/// The test is the sign of the 4×4 determinant
///
/// ```text
/// | ax  ay  ax²+ay²  1 |
/// | bx  by  bx²+by²  1 |
/// | cx  cy  cx²+cy²  1 |
/// | dx  dy  dx²+dy²  1 |
/// ```
///
/// expanded along the lifted column into four [`three_point_det`] minors.
/// Near-cocircular configurations are numerically sensitive.
pub fn in_circle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, d: Point2<F>) -> bool {
    let det = a.norm_squared() * three_point_det(b, c, d)
        - b.norm_squared() * three_point_det(a, c, d)
        + c.norm_squared() * three_point_det(a, b, d)
        - d.norm_squared() * three_point_det(a, b, c);

    det > F::zero()
}

//! Delaunay triangulation of sorted point sets.
//!
//! The triangulation is built by Guibas and Stolfi's divide-and-conquer
//! algorithm directly into a quad-edge [`Subdivision`]. Input must be sorted
//! by `x`, ties broken by `y`, with no duplicates; sorting and deduplication
//! are left to the caller. [`triangulate`] checks this precondition and
//! reports the first violation.
//!
//! Predicates use plain floating-point determinants (see
//! [`crate::predicates`]), so inputs with collinear or cocircular points
//! close to rounding error may come out with inconsistent topology. Exactly
//! representable degeneracies, such as integer grids, are resolved by the
//! strict comparisons.
//!
//! # Example
//!
//! ```
//! use subdiv::triangulation::triangulate;
//! use subdiv::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.3),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//! ];
//!
//! let triangulation = triangulate(&points).unwrap();
//!
//! assert_eq!(triangulation.triangles().len(), 4);
//! assert_eq!(triangulation.convex_hull().len(), 4);
//! assert!(triangulation.is_delaunay());
//! ```

mod divide_conquer;
mod mesh;

pub use divide_conquer::{left_of, right_of, valid};
pub use mesh::{Triangle, Triangulation};

use crate::error::SubdivError;
use crate::primitives::Point2;
use crate::quadedge::Subdivision;
use log::debug;
use num_traits::Float;
use std::cmp::Ordering;

/// Options for [`triangulate_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangulateOptions {
    /// Check that the input is finite, sorted and free of duplicates before
    /// building. When disabled, violating input gives an unspecified (but
    /// memory-safe) mesh.
    pub validate_input: bool,
}

impl Default for TriangulateOptions {
    fn default() -> Self {
        Self {
            validate_input: true,
        }
    }
}

impl TriangulateOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether input is validated.
    pub fn validate_input(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }
}

/// Checks the triangulation precondition.
///
/// Every point must be finite and strictly greater than its predecessor in
/// (x, y) order. Returns the first violation found.
pub fn check_sites<F: Float>(points: &[Point2<F>]) -> Result<(), SubdivError> {
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(SubdivError::NonFinite { index });
        }
        if index == 0 {
            continue;
        }
        match points[index - 1].lex_cmp(p) {
            Ordering::Less => {}
            Ordering::Equal => return Err(SubdivError::DuplicatePoint { index }),
            Ordering::Greater => return Err(SubdivError::NotSorted { index }),
        }
    }
    Ok(())
}

/// Computes the Delaunay triangulation of `points`.
///
/// `points` must be sorted ascending by `x`, ties by `y`, with no
/// duplicates; otherwise an error names the first offending index.
///
/// # Example
///
/// ```
/// use subdiv::triangulation::triangulate;
/// use subdiv::{Point2, SubdivError};
///
/// let points = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
/// let triangulation = triangulate(&points).unwrap();
/// assert_eq!(triangulation.edge_count(), 1);
///
/// let unsorted = [Point2::new(1.0_f64, 0.0), Point2::new(0.0, 0.0)];
/// assert_eq!(
///     triangulate(&unsorted).unwrap_err(),
///     SubdivError::NotSorted { index: 1 }
/// );
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Triangulation<F>, SubdivError> {
    triangulate_with_options(points, TriangulateOptions::default())
}

/// Computes the Delaunay triangulation of `points` with explicit options.
pub fn triangulate_with_options<F: Float>(
    points: &[Point2<F>],
    options: TriangulateOptions,
) -> Result<Triangulation<F>, SubdivError> {
    if options.validate_input {
        check_sites(points)?;
    }

    // A triangulation of n points has at most 3n - 6 edges.
    let mut subdivision = Subdivision::with_capacity(3 * points.len());
    let hull = subdivision.delaunay(points);

    debug!(
        "triangulated {} points into {} edges",
        points.len(),
        subdivision.len()
    );

    Ok(Triangulation::new(subdivision, points.to_vec(), hull))
}

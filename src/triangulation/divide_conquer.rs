//! Guibas–Stolfi divide-and-conquer Delaunay triangulation.
//!
//! # Algorithm
//!
//! 1. Split the sorted sites into a left and a right half
//! 2. Triangulate each half recursively (two or three sites are base cases)
//! 3. Find the lower common tangent of the two hulls
//! 4. Zip the halves together from the bottom up, deleting edges that fail
//!    the in-circle test, until the upper common tangent is reached
//!
//! # Complexity
//!
//! - Time: O(n log n)
//! - Space: O(n)
//!
//! Reference: L. Guibas and J. Stolfi, "Primitives for the Manipulation of
//! General Subdivisions and the Computation of Voronoi Diagrams", ACM
//! Transactions on Graphics 4(2), 1985.

use crate::predicates::{ccw, in_circle};
use crate::primitives::Point2;
use crate::quadedge::{EdgeId, Subdivision};
use log::trace;
use num_traits::Float;

/// Returns true if `x` lies strictly to the left of `e`.
///
/// An edge with an undefined endpoint has nothing to its left.
#[inline]
pub fn left_of<F: Float>(subdivision: &Subdivision<F>, x: Point2<F>, e: EdgeId) -> bool {
    match (subdivision.org(e), subdivision.dest(e)) {
        (Some(org), Some(dest)) => ccw(x, org, dest),
        _ => false,
    }
}

/// Returns true if `x` lies strictly to the right of `e`.
#[inline]
pub fn right_of<F: Float>(subdivision: &Subdivision<F>, x: Point2<F>, e: EdgeId) -> bool {
    match (subdivision.org(e), subdivision.dest(e)) {
        (Some(org), Some(dest)) => ccw(x, dest, org),
        _ => false,
    }
}

/// Returns true if candidate `e` ends above the base edge `basel`, i.e. its
/// destination lies to the right of `basel`.
#[inline]
pub fn valid<F: Float>(subdivision: &Subdivision<F>, e: EdgeId, basel: EdgeId) -> bool {
    subdivision
        .dest(e)
        .is_some_and(|d| right_of(subdivision, d, basel))
}

/// In-circle test over possibly undefined vertices; undefined is "outside".
#[inline]
fn in_circle_at<F: Float>(
    a: Option<Point2<F>>,
    b: Option<Point2<F>>,
    c: Option<Point2<F>>,
    d: Option<Point2<F>>,
) -> bool {
    match (a, b, c, d) {
        (Some(a), Some(b), Some(c), Some(d)) => in_circle(a, b, c, d),
        _ => false,
    }
}

impl<F: Float> Subdivision<F> {
    /// Builds the Delaunay triangulation of `sites` into this subdivision.
    ///
    /// `sites` must be sorted ascending by `x`, ties by `y`, without
    /// duplicates. This is not checked; see
    /// [`triangulate`](crate::triangulation::triangulate) for a validating
    /// entry point.
    ///
    /// Returns `(le, re)`: the counterclockwise convex hull edge out of the
    /// leftmost site and the clockwise convex hull edge out of the rightmost
    /// site. Returns `None` for fewer than two sites, which produce no
    /// edges.
    ///
    /// # Example
    ///
    /// ```
    /// use subdiv::{Point2, Subdivision};
    ///
    /// let sites = [
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(0.0, 1.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(1.0, 1.0),
    /// ];
    /// let mut sub = Subdivision::new();
    /// let (le, re) = sub.delaunay(&sites).unwrap();
    ///
    /// assert_eq!(sub.org(le), Some(sites[0]));
    /// assert_eq!(sub.org(re), Some(sites[3]));
    /// // Four sides and one diagonal.
    /// assert_eq!(sub.len(), 5);
    /// ```
    pub fn delaunay(&mut self, sites: &[Point2<F>]) -> Option<(EdgeId, EdgeId)> {
        match sites.len() {
            0 | 1 => None,
            2 => {
                let a = self.make_edge_between(sites[0], sites[1]);
                Some((a, a.sym()))
            }
            3 => Some(self.delaunay_triangle(sites[0], sites[1], sites[2])),
            n => {
                let (left, right) = sites.split_at(n / 2);
                let (ldo, ldi) = self.delaunay(left)?;
                let (rdi, rdo) = self.delaunay(right)?;
                Some(self.merge(ldo, ldi, rdi, rdo, n))
            }
        }
    }

    fn delaunay_triangle(
        &mut self,
        s0: Point2<F>,
        s1: Point2<F>,
        s2: Point2<F>,
    ) -> (EdgeId, EdgeId) {
        let a = self.make_edge_between(s0, s1);
        let b = self.make_edge_between(s1, s2);
        self.splice(a.sym(), b);

        if ccw(s0, s1, s2) {
            self.connect(b, a);
            (a, b.sym())
        } else if ccw(s0, s2, s1) {
            let c = self.connect(b, a);
            (c.sym(), c)
        } else {
            // Collinear: leave the chain open.
            (a, b.sym())
        }
    }

    /// Zips two adjacent triangulations together.
    ///
    /// `ldo`/`ldi` are the outer and inner hull edges of the left half,
    /// `rdi`/`rdo` those of the right half.
    fn merge(
        &mut self,
        mut ldo: EdgeId,
        mut ldi: EdgeId,
        mut rdi: EdgeId,
        mut rdo: EdgeId,
        n: usize,
    ) -> (EdgeId, EdgeId) {
        // Lower common tangent.
        loop {
            if self.org(rdi).is_some_and(|x| left_of(self, x, ldi)) {
                ldi = self.lnext(ldi);
            } else if self.org(ldi).is_some_and(|x| right_of(self, x, rdi)) {
                rdi = self.rprev(rdi);
            } else {
                break;
            }
        }

        // First cross edge, from rdi.org to ldi.org.
        let mut basel = self.connect(rdi.sym(), ldi);
        if self.org(ldi) == self.org(ldo) {
            ldo = basel.sym();
        }
        if self.org(rdi) == self.org(rdo) {
            rdo = basel;
        }

        let mut cross_edges = 1usize;
        let mut deleted = 0usize;

        loop {
            // Left candidate: first L vertex hit by the rising bubble. Drop
            // L edges out of basel.dest that fail the circle test. Stop once
            // the ring wraps back to basel, where the test would repeat a
            // vertex and rounding decides the outcome.
            let mut lcand = self.onext(basel.sym());
            if valid(self, lcand, basel) {
                while self.onext(lcand) != basel.sym()
                    && in_circle_at(
                        self.dest(basel),
                        self.org(basel),
                        self.dest(lcand),
                        self.dest(self.onext(lcand)),
                    )
                {
                    let t = self.onext(lcand);
                    self.delete_edge(lcand);
                    deleted += 1;
                    lcand = t;
                }
            }

            // Mirror image on the right.
            let mut rcand = self.oprev(basel);
            if valid(self, rcand, basel) {
                while self.oprev(rcand) != basel
                    && in_circle_at(
                        self.dest(basel),
                        self.org(basel),
                        self.dest(rcand),
                        self.dest(self.oprev(rcand)),
                    )
                {
                    let t = self.oprev(rcand);
                    self.delete_edge(rcand);
                    deleted += 1;
                    rcand = t;
                }
            }

            let l_valid = valid(self, lcand, basel);
            let r_valid = valid(self, rcand, basel);

            // basel is the upper common tangent.
            if !l_valid && !r_valid {
                break;
            }

            let pick_right = !l_valid
                || (r_valid
                    && in_circle_at(
                        self.dest(lcand),
                        self.org(lcand),
                        self.org(rcand),
                        self.dest(rcand),
                    ));

            basel = if pick_right {
                self.connect(rcand, basel.sym())
            } else {
                self.connect(basel.sym(), lcand.sym())
            };
            cross_edges += 1;
        }

        trace!(
            "merged {} sites: {} cross edges added, {} edges deleted",
            n,
            cross_edges,
            deleted
        );

        (ldo, rdo)
    }
}

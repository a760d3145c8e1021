//! Finished triangulations and helpers for reading them back.

use crate::predicates::{ccw, in_circle};
use crate::primitives::Point2;
use crate::quadedge::{EdgeId, EdgeRef, Subdivision};
use num_traits::Float;

/// A bounded face of a [`Triangulation`], as indices into its points.
///
/// `a`, `b`, `c` run counterclockwise around the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Corner indices in counterclockwise order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Directed sides `(from, to)`, each with the face on its left.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Whether `v` is one of the corners.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices().contains(&v)
    }
}

/// The Delaunay triangulation of a sorted point set.
///
/// Owns the quad-edge [`Subdivision`] that holds the mesh, the input points
/// and the two hull edges returned by the divide-and-conquer engine. The
/// mesh itself is only reachable by walking edges; [`triangles`] and
/// [`convex_hull`] do that walk for the common cases.
///
/// [`triangles`]: Triangulation::triangles
/// [`convex_hull`]: Triangulation::convex_hull
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    subdivision: Subdivision<F>,
    points: Vec<Point2<F>>,
    hull: Option<(EdgeId, EdgeId)>,
}

impl<F: Float> Triangulation<F> {
    pub(crate) fn new(
        subdivision: Subdivision<F>,
        points: Vec<Point2<F>>,
        hull: Option<(EdgeId, EdgeId)>,
    ) -> Self {
        Self {
            subdivision,
            points,
            hull,
        }
    }

    /// The underlying quad-edge mesh.
    pub fn subdivision(&self) -> &Subdivision<F> {
        &self.subdivision
    }

    /// Consumes the triangulation, returning the mesh for further editing.
    pub fn into_subdivision(self) -> Subdivision<F> {
        self.subdivision
    }

    /// The input points, in their sorted order.
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// `(le, re)`: the counterclockwise hull edge out of the leftmost point
    /// and the clockwise hull edge out of the rightmost point. `None` for
    /// fewer than two points.
    pub fn hull_edges(&self) -> Option<(EdgeId, EdgeId)> {
        self.hull
    }

    /// Read-only view of an edge of the mesh.
    pub fn edge(&self, e: EdgeId) -> EdgeRef<'_, F> {
        self.subdivision.edge(e)
    }

    /// Number of undirected edges in the mesh.
    pub fn edge_count(&self) -> usize {
        self.subdivision.len()
    }

    /// Index of `p` in [`points`](Self::points), found by binary search.
    pub fn vertex_index(&self, p: Point2<F>) -> Option<usize> {
        self.points.binary_search_by(|q| q.lex_cmp(&p)).ok()
    }

    /// Convex hull vertices in counterclockwise order, starting at the
    /// lexicographically smallest point.
    ///
    /// Walks the outer face from the left hull edge. For collinear input
    /// the outer face runs along both sides of the chain, so the interior
    /// points appear twice (out and back).
    pub fn convex_hull(&self) -> Vec<Point2<F>> {
        let Some((le, _)) = self.hull else {
            return self.points.clone();
        };

        let mut hull = Vec::new();
        let mut e = le;
        loop {
            if let Some(p) = self.subdivision.org(e) {
                hull.push(p);
            }
            e = self.subdivision.rprev(e);
            if e == le {
                break;
            }
        }
        hull
    }

    /// Every bounded triangular face, each exactly once.
    ///
    /// A face is reported when its left-face cycle has length three and its
    /// vertices are counterclockwise; this excludes the outer face.
    pub fn triangles(&self) -> Vec<Triangle> {
        let sub = &self.subdivision;
        let mut triangles = Vec::new();

        for e in sub.edges() {
            for d in [e, e.sym()] {
                let f = sub.lnext(d);
                let g = sub.lnext(f);
                // Report each face from its smallest handle only.
                if sub.lnext(g) != d || d > f || d > g {
                    continue;
                }
                let (Some(a), Some(b), Some(c)) = (sub.org(d), sub.org(f), sub.org(g)) else {
                    continue;
                };
                if !ccw(a, b, c) {
                    continue;
                }
                if let (Some(ia), Some(ib), Some(ic)) =
                    (self.vertex_index(a), self.vertex_index(b), self.vertex_index(c))
                {
                    triangles.push(Triangle::new(ia, ib, ic));
                }
            }
        }

        triangles
    }

    /// Checks that no point lies strictly inside any triangle's circumcircle.
    ///
    /// Brute force, O(triangles × points); meant for tests and debugging.
    pub fn is_delaunay(&self) -> bool {
        self.triangles().iter().all(|tri| {
            let (a, b, c) = (self.points[tri.a], self.points[tri.b], self.points[tri.c]);
            self.points
                .iter()
                .enumerate()
                .filter(|(i, _)| !tri.contains_vertex(*i))
                .all(|(_, &p)| !in_circle(a, b, c, p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn build(points: &[Point2<f64>]) -> Triangulation<f64> {
        let mut sub = Subdivision::new();
        let hull = sub.delaunay(points);
        Triangulation::new(sub, points.to_vec(), hull)
    }

    #[test]
    fn test_triangle_corners_and_sides() {
        let tri = Triangle::new(4, 7, 2);

        assert_eq!(tri.vertices(), [4, 7, 2]);
        assert_eq!(tri.edges(), [(4, 7), (7, 2), (2, 4)]);
        assert!(tri.contains_vertex(2));
        assert!(!tri.contains_vertex(5));
    }

    #[test]
    fn test_empty_and_single() {
        let empty = build(&[]);
        assert!(empty.triangles().is_empty());
        assert!(empty.convex_hull().is_empty());
        assert_eq!(empty.hull_edges(), None);

        let single = build(&[p(1.0, 2.0)]);
        assert_eq!(single.convex_hull(), vec![p(1.0, 2.0)]);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_single_triangle() {
        let tri = build(&[p(0.0, 0.0), p(0.5, 1.0), p(1.0, 0.0)]);
        let triangles = tri.triangles();

        assert_eq!(triangles.len(), 1);
        let t = triangles[0];
        let mut indices = vec![t.a, t.b, t.c];
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(ccw(tri.points[t.a], tri.points[t.b], tri.points[t.c]));
    }

    #[test]
    fn test_collinear_has_no_triangles() {
        let tri = build(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert!(tri.triangles().is_empty());
        assert_eq!(
            tri.convex_hull(),
            vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(1.0, 0.0)]
        );
    }

    #[test]
    fn test_square_hull_and_faces() {
        let tri = build(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(1.0, 1.0)]);

        assert_eq!(tri.triangles().len(), 2);
        assert_eq!(
            tri.convex_hull(),
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
        );
        assert!(tri.is_delaunay());
    }

    #[test]
    fn test_vertex_index() {
        let tri = build(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)]);
        assert_eq!(tri.vertex_index(p(0.0, 1.0)), Some(1));
        assert_eq!(tri.vertex_index(p(1.0, 0.0)), Some(2));
        assert_eq!(tri.vertex_index(p(5.0, 5.0)), None);
    }

    #[test]
    fn test_square_with_center() {
        let tri = build(&[
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(0.5, 0.5),
            p(1.0, 0.0),
            p(1.0, 1.0),
        ]);
        assert_eq!(tri.triangles().len(), 4);
        assert_eq!(tri.edge_count(), 8);
        assert!(tri.is_delaunay());
    }

    #[test]
    fn test_edge_view() {
        let tri = build(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let (le, re) = tri.hull_edges().unwrap();
        assert_eq!(tri.edge(le).org(), Some(p(0.0, 0.0)));
        assert_eq!(tri.edge(le).sym(), tri.edge(re));
    }
}

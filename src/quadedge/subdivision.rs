//! Arena of quad-edge bundles and the topological operators on them.

use super::edge::EdgeId;
use super::edge_ref::EdgeRef;
use crate::primitives::Point2;

/// One quad-edge bundle: four directed representations sharing a record.
#[derive(Debug, Clone)]
struct Quad<F> {
    /// `onext` successor of each representation, indexed by rotation.
    next: [EdgeId; 4],
    /// Origin of each representation. Only primal slots are filled by the
    /// triangulation; dual slots stay `None`.
    data: [Option<Point2<F>>; 4],
    live: bool,
}

impl<F> Quad<F> {
    fn fresh(bundle: usize) -> Self {
        let e = |r| EdgeId::new(bundle, r);
        Self {
            // Primal directions are their own rings; the two dual
            // directions form a ring of two.
            next: [e(0), e(3), e(2), e(1)],
            data: [None, None, None, None],
            live: true,
        }
    }
}

/// A planar subdivision stored as an arena of quad-edge bundles.
///
/// Edges are addressed by [`EdgeId`] handles. The subdivision has no notion
/// of a diagram-wide container beyond the arena: a mesh is whatever is
/// reachable from one edge through ring traversal. Deleted bundles are put
/// on a free list and recycled by later [`make_edge`](Self::make_edge)
/// calls, so a handle must not be used after its edge is deleted.
///
/// # Example
///
/// ```
/// use subdiv::{Point2, Subdivision};
///
/// let mut sub = Subdivision::new();
/// let a = sub.make_edge();
/// sub.set_org(a, Point2::new(0.0_f64, 0.0));
/// sub.set_dest(a, Point2::new(1.0, 0.0));
///
/// let b = sub.make_edge();
/// sub.set_org(b, Point2::new(1.0, 0.0));
/// sub.set_dest(b, Point2::new(0.0, 1.0));
/// sub.splice(a.sym(), b);
///
/// // Close the triangle.
/// let c = sub.connect(b, a);
/// assert_eq!(sub.org(c), Some(Point2::new(0.0, 1.0)));
/// assert_eq!(sub.dest(c), Some(Point2::new(0.0, 0.0)));
/// assert_eq!(sub.face_cycle(a).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Subdivision<F> {
    quads: Vec<Quad<F>>,
    free: Vec<usize>,
}

impl<F> Default for Subdivision<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Subdivision<F> {
    /// Creates an empty subdivision.
    pub fn new() -> Self {
        Self {
            quads: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates an empty subdivision with room for `edges` bundles.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            quads: Vec::with_capacity(edges),
            free: Vec::new(),
        }
    }

    /// Number of live (not deleted) edges.
    pub fn len(&self) -> usize {
        self.quads.len() - self.free.len()
    }

    /// Returns true if the subdivision holds no live edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `e` names a bundle that exists and has not been
    /// deleted.
    pub fn is_live(&self, e: EdgeId) -> bool {
        self.quads.get(e.bundle()).is_some_and(|q| q.live)
    }

    /// Iterates the primal representation (`r = 0`) of every live edge.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.quads
            .iter()
            .enumerate()
            .filter(|(_, q)| q.live)
            .map(|(i, _)| EdgeId::new(i, 0))
    }

    /// Creates an isolated edge with undefined endpoints.
    ///
    /// Returns the primal representation. The edge's two directions are
    /// each alone in their origin ring.
    pub fn make_edge(&mut self) -> EdgeId {
        match self.free.pop() {
            Some(bundle) => {
                self.quads[bundle] = Quad::fresh(bundle);
                EdgeId::new(bundle, 0)
            }
            None => {
                let bundle = self.quads.len();
                self.quads.push(Quad::fresh(bundle));
                EdgeId::new(bundle, 0)
            }
        }
    }

    /// Next edge counterclockwise around the origin of `e`.
    #[inline]
    pub fn onext(&self, e: EdgeId) -> EdgeId {
        self.quads[e.bundle()].next[e.rotation()]
    }

    #[inline]
    fn set_onext(&mut self, e: EdgeId, next: EdgeId) {
        self.quads[e.bundle()].next[e.rotation()] = next;
    }

    /// Next edge clockwise around the origin of `e`.
    #[inline]
    pub fn oprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot()).rot()
    }

    /// Next edge counterclockwise around the destination of `e`.
    #[inline]
    pub fn dnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.sym()).sym()
    }

    /// Next edge clockwise around the destination of `e`.
    #[inline]
    pub fn dprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot_inv()
    }

    /// Next edge counterclockwise around the left face of `e`.
    #[inline]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot()
    }

    /// Next edge clockwise around the left face of `e`.
    #[inline]
    pub fn lprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e).sym()
    }

    /// Next edge counterclockwise around the right face of `e`.
    #[inline]
    pub fn rnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot()).rot_inv()
    }

    /// Next edge clockwise around the right face of `e`.
    #[inline]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.sym())
    }

    /// Merges or splits the rings of `a` and `b`.
    ///
    /// Exchanges the `onext` successors of `a` and `b`, and of their
    /// corresponding dual edges. If the origin rings of `a` and `b` were
    /// distinct they become one; if they were the same ring it is split in
    /// two. The left-face rings are affected the same way.
    pub fn splice(&mut self, a: EdgeId, b: EdgeId) {
        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha = a_next.rot();
        let beta = b_next.rot();
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.set_onext(a, b_next);
        self.set_onext(b, a_next);
        self.set_onext(alpha, beta_next);
        self.set_onext(beta, alpha_next);
    }

    /// Removes `e` from the subdivision and frees its bundle.
    ///
    /// Every other edge's rings stay consistent. The handle `e` (and its
    /// rotations) must not be used afterwards. Deleting an edge that is
    /// already dead does nothing.
    pub fn delete_edge(&mut self, e: EdgeId) {
        if !self.is_live(e) {
            return;
        }

        let e_prev = self.oprev(e);
        self.splice(e, e_prev);
        let sym_prev = self.oprev(e.sym());
        self.splice(e.sym(), sym_prev);

        let quad = &mut self.quads[e.bundle()];
        quad.live = false;
        self.free.push(e.bundle());
    }

    /// Edges around the left face of `e`, starting with `e`.
    pub fn face_cycle(&self, e: EdgeId) -> Vec<EdgeId> {
        let mut cycle = vec![e];
        let mut cur = self.lnext(e);
        while cur != e {
            cycle.push(cur);
            cur = self.lnext(cur);
        }
        cycle
    }

    /// Edges leaving the origin of `e` in counterclockwise order, starting
    /// with `e`. The length is the degree of the vertex.
    pub fn origin_ring(&self, e: EdgeId) -> Vec<EdgeId> {
        let mut ring = vec![e];
        let mut cur = self.onext(e);
        while cur != e {
            ring.push(cur);
            cur = self.onext(cur);
        }
        ring
    }

    /// Read-only view of `e` for traversal.
    pub fn edge(&self, e: EdgeId) -> EdgeRef<'_, F> {
        EdgeRef::new(self, e)
    }
}

impl<F: Copy> Subdivision<F> {
    /// Origin of `e`, or `None` if it has not been set.
    #[inline]
    pub fn org(&self, e: EdgeId) -> Option<Point2<F>> {
        self.quads[e.bundle()].data[e.rotation()]
    }

    /// Destination of `e`; always the origin of `e.sym()`.
    #[inline]
    pub fn dest(&self, e: EdgeId) -> Option<Point2<F>> {
        self.org(e.sym())
    }

    /// Sets the origin of `e`.
    #[inline]
    pub fn set_org(&mut self, e: EdgeId, p: Point2<F>) {
        self.quads[e.bundle()].data[e.rotation()] = Some(p);
    }

    /// Sets the destination of `e`, i.e. the origin of `e.sym()`.
    #[inline]
    pub fn set_dest(&mut self, e: EdgeId, p: Point2<F>) {
        self.set_org(e.sym(), p);
    }

    /// Creates an isolated edge from `org` to `dest`.
    pub fn make_edge_between(&mut self, org: Point2<F>, dest: Point2<F>) -> EdgeId {
        let e = self.make_edge();
        self.set_org(e, org);
        self.set_dest(e, dest);
        e
    }

    /// Adds an edge from the destination of `a` to the origin of `b`.
    ///
    /// The new edge joins the ring around `a`'s destination and the ring
    /// around `b`'s origin, so `a`, the new edge and `b` share a left face.
    /// The caller is responsible for the connection not crossing existing
    /// edges.
    pub fn connect(&mut self, a: EdgeId, b: EdgeId) -> EdgeId {
        let e = self.make_edge();
        let org = self.dest(a);
        let dest = self.org(b);
        let quad = &mut self.quads[e.bundle()];
        quad.data[e.rotation()] = org;
        quad.data[e.sym().rotation()] = dest;

        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(e.sym(), b);
        e
    }
}

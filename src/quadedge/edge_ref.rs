//! Borrowed, read-only view of a directed edge.

use super::edge::EdgeId;
use super::subdivision::Subdivision;
use crate::primitives::Point2;
use std::fmt;

/// A directed edge together with the subdivision it lives in.
///
/// This is the caller-facing way to walk a finished mesh: every traversal
/// returns another `EdgeRef` into the same subdivision.
///
/// Equality is geometric: two views are equal when their origins and
/// destinations are both defined and coincide, even if they name different
/// bundles. Use [`EdgeRef::id`] when identity matters (e.g. as a map key).
pub struct EdgeRef<'a, F> {
    subdivision: &'a Subdivision<F>,
    id: EdgeId,
}

impl<F> Clone for EdgeRef<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for EdgeRef<'_, F> {}

impl<'a, F> EdgeRef<'a, F> {
    pub(crate) fn new(subdivision: &'a Subdivision<F>, id: EdgeId) -> Self {
        Self { subdivision, id }
    }

    #[inline]
    fn with(self, id: EdgeId) -> Self {
        Self { id, ..self }
    }

    /// Identity handle of this edge.
    #[inline]
    pub fn id(self) -> EdgeId {
        self.id
    }

    #[inline]
    pub fn sym(self) -> Self {
        self.with(self.id.sym())
    }

    #[inline]
    pub fn rot(self) -> Self {
        self.with(self.id.rot())
    }

    #[inline]
    pub fn rot_inv(self) -> Self {
        self.with(self.id.rot_inv())
    }

    #[inline]
    pub fn onext(self) -> Self {
        self.with(self.subdivision.onext(self.id))
    }

    #[inline]
    pub fn oprev(self) -> Self {
        self.with(self.subdivision.oprev(self.id))
    }

    #[inline]
    pub fn dnext(self) -> Self {
        self.with(self.subdivision.dnext(self.id))
    }

    #[inline]
    pub fn dprev(self) -> Self {
        self.with(self.subdivision.dprev(self.id))
    }

    #[inline]
    pub fn lnext(self) -> Self {
        self.with(self.subdivision.lnext(self.id))
    }

    #[inline]
    pub fn lprev(self) -> Self {
        self.with(self.subdivision.lprev(self.id))
    }

    #[inline]
    pub fn rnext(self) -> Self {
        self.with(self.subdivision.rnext(self.id))
    }

    #[inline]
    pub fn rprev(self) -> Self {
        self.with(self.subdivision.rprev(self.id))
    }
}

impl<F: Copy> EdgeRef<'_, F> {
    /// Origin vertex, `None` if undefined.
    #[inline]
    pub fn org(self) -> Option<Point2<F>> {
        self.subdivision.org(self.id)
    }

    /// Destination vertex, `None` if undefined.
    #[inline]
    pub fn dest(self) -> Option<Point2<F>> {
        self.subdivision.dest(self.id)
    }
}

impl<F: Copy + PartialEq> PartialEq for EdgeRef<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        if self.id == other.id && std::ptr::eq(self.subdivision, other.subdivision) {
            return true;
        }
        match (self.org(), self.dest(), other.org(), other.dest()) {
            (Some(a0), Some(a1), Some(b0), Some(b1)) => a0 == b0 && a1 == b1,
            _ => false,
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for EdgeRef<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef").field("id", &self.id).finish()
    }
}

impl<F: Copy + fmt::Display> fmt::Display for EdgeRef<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.org(), self.dest()) {
            (Some(o), Some(d)) => write!(f, "({}, {}) -> ({}, {})", o.x, o.y, d.x, d.y),
            _ => f.write_str("undefined"),
        }
    }
}

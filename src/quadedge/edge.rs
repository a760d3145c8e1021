//! Stable handles to directed edges.

/// Handle to one directed representation of a quad-edge bundle.
///
/// Encoded as `bundle * 4 + r` where `r` is the rotation index: `r = 0` and
/// `r = 2` are the two directions of the primal edge, `r = 1` and `r = 3`
/// the two directions of its dual. Rotation and reversal are arithmetic on
/// the handle and never touch the arena.
///
/// Equality is identity: two handles are equal only when they name the same
/// representation of the same bundle. For geometric comparison use
/// [`EdgeRef`](super::EdgeRef).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    #[inline]
    pub(crate) fn new(bundle: usize, r: usize) -> Self {
        Self(bundle * 4 + (r & 3))
    }

    /// Index of the owning bundle in its arena.
    #[inline]
    pub fn bundle(self) -> usize {
        self.0 >> 2
    }

    /// Rotation index within the bundle, in `0..4`.
    #[inline]
    pub fn rotation(self) -> usize {
        self.0 & 3
    }

    /// Raw handle value, unique within one arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns true for the two primal (vertex-to-vertex) representations.
    #[inline]
    pub fn is_primal(self) -> bool {
        self.rotation() % 2 == 0
    }

    #[inline]
    fn offset(self, k: usize) -> Self {
        Self::new(self.bundle(), self.rotation() + k)
    }

    /// The same edge, reversed.
    #[inline]
    pub fn sym(self) -> Self {
        self.offset(2)
    }

    /// The dual edge, directed from the right face to the left face.
    #[inline]
    pub fn rot(self) -> Self {
        self.offset(1)
    }

    /// The dual edge, directed from the left face to the right face.
    #[inline]
    pub fn rot_inv(self) -> Self {
        self.offset(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        let e = EdgeId::new(7, 3);
        assert_eq!(e.bundle(), 7);
        assert_eq!(e.rotation(), 3);
        assert_eq!(e.index(), 31);
        assert!(!e.is_primal());
        assert!(EdgeId::new(7, 2).is_primal());
    }

    #[test]
    fn test_sym_is_involution() {
        for r in 0..4 {
            let e = EdgeId::new(5, r);
            assert_ne!(e.sym(), e);
            assert_eq!(e.sym().sym(), e);
            assert_eq!(e.sym().bundle(), e.bundle());
        }
    }

    #[test]
    fn test_rot_has_order_four() {
        for r in 0..4 {
            let e = EdgeId::new(2, r);
            assert_eq!(e.rot().rot().rot().rot(), e);
            assert_eq!(e.rot().rot(), e.sym());
            assert_eq!(e.rot().rot_inv(), e);
            assert_eq!(e.rot_inv(), e.rot().rot().rot());
        }
    }

    #[test]
    fn test_rot_alternates_primal_and_dual() {
        let e = EdgeId::new(0, 0);
        assert!(e.is_primal());
        assert!(!e.rot().is_primal());
        assert!(e.rot().rot().is_primal());
    }
}

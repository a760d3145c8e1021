//! Quad-edge representation of planar subdivisions.
//!
//! A quad-edge bundle groups the four directed versions of one undirected
//! edge: its two primal directions and the two directions of its dual, the
//! edge joining the faces on either side. Each directed edge points to the
//! next edge counterclockwise around its origin (`onext`); every other
//! traversal (`lnext`, `rprev`, ...) is a composition of `onext` with the
//! rotations `rot`, `sym` and `rot_inv`.
//!
//! Three operators modify the structure: [`Subdivision::make_edge`],
//! [`Subdivision::splice`] and the two built on top of them,
//! [`Subdivision::connect`] and [`Subdivision::delete_edge`].

mod edge;
mod edge_ref;
mod subdivision;

pub use edge::EdgeId;
pub use edge_ref::EdgeRef;
pub use subdivision::Subdivision;

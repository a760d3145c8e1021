//! subdiv - Delaunay triangulation over quad-edge subdivisions
//!
//! Builds the Delaunay triangulation of a sorted point set with Guibas and
//! Stolfi's divide-and-conquer algorithm, storing the result in a quad-edge
//! [`Subdivision`] that can be walked edge by edge afterwards.

pub mod error;
pub mod predicates;
pub mod primitives;
pub mod quadedge;
pub mod triangulation;

pub use error::SubdivError;
pub use predicates::{ccw, in_circle, three_point_det};
pub use primitives::Point2;
pub use quadedge::{EdgeId, EdgeRef, Subdivision};
pub use triangulation::{
    triangulate, triangulate_with_options, Triangle, TriangulateOptions, Triangulation,
};

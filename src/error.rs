//! Error types for subdivision operations.

use thiserror::Error;

/// Precondition violations detected before a triangulation is built.
///
/// The quad-edge operators themselves never fail; these errors only come
/// from the checked entry points in [`crate::triangulation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivError {
    /// A point is smaller than its predecessor in (x, y) order.
    #[error("points are not sorted by (x, y): index {index} precedes its predecessor")]
    NotSorted {
        /// Index of the first out-of-order point.
        index: usize,
    },

    /// A point repeats its predecessor.
    #[error("duplicate point at index {index}")]
    DuplicatePoint {
        /// Index of the repeated point.
        index: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at index {index}")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
}

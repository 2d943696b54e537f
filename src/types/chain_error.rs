//! Failure types for chain operations.
//!
//! Two disjoint categories exist, mirroring how they surface:
//!
//! - **Shape validation** ([`ChainError::ShapeMismatch`]) — a collection-aware
//!   operation was handed the wrong shape. Raised before the supplied function
//!   runs and never routed through the error handler.
//! - **Transformation failure** ([`ChainError::Transform`]) — a caller-supplied
//!   function returned an error. Observed by the handler (when one is set) and
//!   then surfaced unchanged from the terminal operation.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::types::value::ChainValue;

/// The failure type of every caller-supplied transformation function.
///
/// Boxed so closures can fail with whatever error type is at hand:
///
/// ```
/// use fluent_chain::{chain, TransformError};
///
/// let result = chain(2)
///     .chain(|_| Err(TransformError::from("boom")))
///     .close();
///
/// assert!(result.is_err());
/// ```
pub type TransformError = Box<dyn StdError + Send + Sync + 'static>;

/// An error captured by a chain, surfaced from [`close`](crate::types::Chain::close).
///
/// Transformation failures hold the original error behind an `Arc`, keeping
/// `ChainError: Clone` (so a failed container can still be cloned) while the
/// handler and the caller both observe the same underlying error object.
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// A collection-aware operation was given a value of the wrong shape.
    #[error("{context}, but was passed:{value}")]
    ShapeMismatch {
        /// The operation and what it required, e.g. `chain_map expected an array`.
        context: &'static str,
        /// Plain-text rendering of the offending value.
        value: String,
    },

    /// A caller-supplied function failed.
    #[error(transparent)]
    Transform(Arc<dyn StdError + Send + Sync + 'static>),
}

impl ChainError {
    pub(crate) fn shape(context: &'static str, value: &ChainValue) -> Self {
        Self::ShapeMismatch { context, value: value.to_string() }
    }

    pub(crate) fn transform(source: TransformError) -> Self {
        Self::Transform(Arc::from(source))
    }

    /// Returns `true` for a shape-validation failure.
    #[inline]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    /// Returns `true` for a captured transformation failure.
    #[inline]
    pub fn is_transform(&self) -> bool {
        matches!(self, Self::Transform(_))
    }
}

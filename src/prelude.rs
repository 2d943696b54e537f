//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use fluent_chain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`sequence!`](crate::sequence), [`set!`](crate::set),
//!   [`mapping!`](crate::mapping)
//! - **Types**: [`Chain`], [`ChainValue`], [`ChainError`], [`RichContent`]
//! - **Traits**: [`IntoChain`]
//! - **Entry points**: [`chain`], the [`format`](crate::format) module
//!
//! # Examples
//!
//! ```
//! use fluent_chain::prelude::*;
//!
//! let result = chain(sequence![1, 2, 3])
//!     .chain_map(|item, _, _| Ok(ChainValue::from(item.as_number().unwrap_or(0.0) * 2.0)))
//!     .close();
//!
//! assert_eq!(result.unwrap(), sequence![2, 4, 6]);
//! ```

// Macros
pub use crate::{mapping, sequence, set};

// Core types and the factory
pub use crate::types::{chain, Chain, ChainError, ChainResult, ChainValue, IterKey, RichContent, TransformError};

// Traits
pub use crate::traits::IntoChain;

// Formatting helpers
pub use crate::format;

//! Core types: the chain container, its value model, its errors, and the
//! notebook display bundle.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::types::{chain, ChainValue};
//!
//! let result = chain(vec![1, 2, 3])
//!     .chain_filter(|item| Ok(item.as_number().unwrap_or(0.0) > 1.0))
//!     .close();
//!
//! assert_eq!(result.unwrap(), ChainValue::sequence([2, 3]));
//! ```

pub mod chain;
pub mod chain_error;
pub mod rich_content;
pub mod value;

pub use chain::{chain, Chain, ChainResult, IterKey};
pub use chain_error::{ChainError, TransformError};
pub use rich_content::RichContent;
pub use value::ChainValue;

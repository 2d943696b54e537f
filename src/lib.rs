//! Fluent value chaining and formatting utilities for interactive notebook
//! sessions.
//!
//! The centerpiece is [`chain`]: wrap any value, apply successive
//! transformations with centralized error capture, inspect intermediate
//! results, and extract the outcome with [`close`](types::Chain::close). The
//! [`format`] module carries the stand-alone helpers notebooks reach for when
//! printing values.
//!
//! # Examples
//!
//! ## Chaining transformations
//!
//! ```
//! use fluent_chain::{chain, ChainValue};
//!
//! let result = chain(vec![1, 2, 3])
//!     .chain_map(|item, _, _| Ok(ChainValue::from(item.as_number().unwrap_or(0.0) + 2.0)))
//!     .chain_filter(|item| Ok(item.as_number().unwrap_or(0.0) >= 4.0))
//!     .close();
//!
//! assert_eq!(result.unwrap(), fluent_chain::sequence![4, 5]);
//! ```
//!
//! ## Observing failures without suppressing them
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use fluent_chain::chain;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&log);
//!
//! let result = chain(2)
//!     .error_handler(move |error| sink.borrow_mut().push(error.to_string()))
//!     .chain(|_| Err("stage exploded".into()))
//!     .close();
//!
//! assert!(result.is_err());
//! assert_eq!(*log.borrow(), vec!["stage exploded".to_string()]);
//! ```
//!
//! ## Formatting helpers
//!
//! ```
//! use fluent_chain::format;
//!
//! assert_eq!(format::zero_fill(23), "023");
//! assert_eq!(format::ellipsify("0123456789", 5), "01234\u{2026}");
//! ```

/// Pure printing and domain-mapping helpers
pub mod format;
/// Constructor macros for collection values
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for starting chains
pub mod traits;
/// The chain container, its value model, and its errors
pub mod types;

pub use traits::IntoChain;
pub use types::{chain, Chain, ChainError, ChainResult, ChainValue, IterKey, RichContent, TransformError};

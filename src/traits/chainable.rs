//! Extension trait for starting a chain from any convertible value.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::traits::IntoChain;
//! use fluent_chain::ChainValue;
//!
//! let result = vec![1, 2, 3]
//!     .into_chain()
//!     .chain_filter(|item| Ok(item.as_number().unwrap_or(0.0) >= 2.0))
//!     .close();
//!
//! assert_eq!(result.unwrap(), ChainValue::sequence([2, 3]));
//! ```

use crate::types::chain::Chain;
use crate::types::value::ChainValue;

/// Starts a chain directly from a value, as an alternative to the
/// [`chain`](crate::types::chain) free function.
pub trait IntoChain {
    /// Wraps `self` in a [`Chain`].
    fn into_chain(self) -> Chain;
}

impl<T> IntoChain for T
where
    T: Into<ChainValue>,
{
    #[inline]
    fn into_chain(self) -> Chain {
        Chain::new(self)
    }
}

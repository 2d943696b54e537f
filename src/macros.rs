//! Constructor macros for [`ChainValue`](crate::types::ChainValue)
//! collections.
//!
//! - [`macro@crate::sequence`] - Builds a `Sequence` from a list of values.
//! - [`macro@crate::set`] - Builds a `Set`, dropping duplicates in insertion
//!   order.
//! - [`macro@crate::mapping`] - Builds a `Mapping` from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::{chain, mapping, sequence, set};
//!
//! let seq = sequence![1, 2, 3];
//! let unique = set!["a", "b", "a"];
//! let config = mapping! { "retries" => 3, "verbose" => true };
//!
//! assert!(chain(seq).to_array().close().is_ok());
//! assert_eq!(unique, set!["a", "b"]);
//! assert!(config.is_mapping());
//! ```

/// Builds a [`ChainValue::Sequence`](crate::types::ChainValue::Sequence) from
/// a list of values, each converted with `ChainValue::from`.
///
/// # Examples
///
/// ```
/// use fluent_chain::{sequence, ChainValue};
///
/// let seq = sequence![1, "two", true];
/// assert_eq!(
///     seq,
///     ChainValue::Sequence(vec![
///         ChainValue::from(1),
///         ChainValue::from("two"),
///         ChainValue::from(true),
///     ]),
/// );
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::ChainValue::Sequence(Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ChainValue::Sequence(vec![$($crate::ChainValue::from($item)),+])
    };
}

/// Builds a [`ChainValue::Set`](crate::types::ChainValue::Set), dropping
/// duplicates while keeping insertion order.
///
/// # Examples
///
/// ```
/// use fluent_chain::set;
///
/// assert_eq!(set![1, 1, 2], set![1, 2]);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::ChainValue::Set(Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ChainValue::set([$($crate::ChainValue::from($item)),+])
    };
}

/// Builds a [`ChainValue::Mapping`](crate::types::ChainValue::Mapping) from
/// `key => value` pairs; a repeated key replaces the earlier value in place.
///
/// # Examples
///
/// ```
/// use fluent_chain::{mapping, ChainValue};
///
/// let entries = mapping! { "eleven" => 11, "twelve" => 12 };
/// assert_eq!(
///     entries,
///     ChainValue::mapping([("eleven", 11), ("twelve", 12)]),
/// );
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::ChainValue::Mapping(Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::ChainValue::mapping([$(($key, $crate::ChainValue::from($value))),+])
    };
}

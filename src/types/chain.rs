//! The fluent chain container.
//!
//! [`Chain`] wraps a [`ChainValue`] and exposes methods to transform it,
//! inspect it, observe failures, clone it, and extract the final value. The
//! container carries its state as a `Result` internally: once an operation
//! fails, every later operation passes through untouched and the failure
//! surfaces unchanged from [`close`](Chain::close), exactly as if the failing
//! operation had aborted the whole expression.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::{chain, ChainValue};
//!
//! let result = chain(3)
//!     .chain(|value| Ok(ChainValue::from(value.as_number().unwrap_or(0.0) + 2.0)))
//!     .close();
//!
//! assert_eq!(result.unwrap(), ChainValue::from(5));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::types::chain_error::{ChainError, TransformError};
use crate::types::rich_content::RichContent;
use crate::types::value::ChainValue;

/// Result of a terminal chain operation.
pub type ChainResult = Result<ChainValue, ChainError>;

/// The key handed to [`chain_for_each`](Chain::chain_for_each), matching the
/// native iteration shape of the collection being walked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterKey<'a> {
    /// Position within a [`Sequence`](ChainValue::Sequence).
    Index(usize),
    /// The element itself, for a [`Set`](ChainValue::Set).
    Element(&'a ChainValue),
    /// The entry key, for a [`Mapping`](ChainValue::Mapping).
    Key(&'a str),
}

type ErrorHandler = Rc<dyn Fn(&ChainError)>;

/// Outcome of one chaining step, before handler routing is applied.
enum StepFailure {
    /// Wrong input shape. Captured without consulting the handler.
    Shape(ChainError),
    /// A caller-supplied function failed. Observed by the handler.
    Transform(TransformError),
}

impl StepFailure {
    fn shape(context: &'static str, value: &ChainValue) -> Self {
        Self::Shape(ChainError::shape(context, value))
    }
}

impl From<TransformError> for StepFailure {
    fn from(source: TransformError) -> Self {
        Self::Transform(source)
    }
}

/// Wraps a value for fluent transformation.
///
/// Shorthand for [`Chain::new`]; this is the usual entry point.
///
/// # Examples
///
/// ```
/// use fluent_chain::chain;
///
/// assert_eq!(chain("hello").close().unwrap().as_text(), Some("hello"));
/// ```
pub fn chain(value: impl Into<ChainValue>) -> Chain {
    Chain::new(value)
}

/// A fluent wrapper holding a value plus an optional error observation
/// handler.
///
/// Every chaining operation consumes the container and returns it, so calls
/// sequence naturally:
///
/// ```
/// use fluent_chain::{chain, ChainValue};
///
/// let total = chain(vec![1, 2, 3])
///     .chain_map(|item, _, _| Ok(ChainValue::from(item.as_number().unwrap_or(0.0) + 2.0)))
///     .chain_reduce(
///         |acc, item, _, _| {
///             Ok(ChainValue::from(
///                 acc.as_number().unwrap_or(0.0) + item.as_number().unwrap_or(0.0),
///             ))
///         },
///         0,
///     )
///     .close();
///
/// assert_eq!(total.unwrap(), ChainValue::from(12));
/// ```
///
/// # Error handling
///
/// The handler set by [`error_handler`](Chain::error_handler) is an
/// observation hook, not a recovery mechanism: it sees each transformation
/// failure exactly once and the failure still surfaces from
/// [`close`](Chain::close). Shape-validation failures bypass the handler
/// entirely; they signal programmer misuse rather than a data fault.
///
/// # Cloning
///
/// `Chain` implements [`Clone`]: the clone gets an independent copy of the
/// current value and shares the handler by reference, so chaining on one
/// clone never affects the other.
#[must_use]
#[derive(Clone)]
pub struct Chain {
    state: ChainResult,
    handler: Option<ErrorHandler>,
}

impl Chain {
    /// Wraps `value`. Any value is accepted as-is, including
    /// [`ChainValue::Null`].
    pub fn new(value: impl Into<ChainValue>) -> Self {
        Self { state: Ok(value.into()), handler: None }
    }

    /// Runs one step against the held value, routing failures by category:
    /// transform failures notify the handler before capture, shape failures
    /// are captured silently. A container that already failed passes through.
    fn step<F>(self, op: F) -> Self
    where
        F: FnOnce(ChainValue) -> Result<ChainValue, StepFailure>,
    {
        let Self { state, handler } = self;
        let state = match state {
            Ok(value) => match op(value) {
                Ok(next) => Ok(next),
                Err(StepFailure::Shape(error)) => Err(error),
                Err(StepFailure::Transform(source)) => {
                    let error = ChainError::transform(source);
                    if let Some(notify) = &handler {
                        notify(&error);
                    }
                    Err(error)
                },
            },
            Err(error) => Err(error),
        };
        Self { state, handler }
    }

    /// Replaces the held value with `f`'s output.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// let result = chain(2)
    ///     .chain(|value| Ok(ChainValue::from(value.as_number().unwrap_or(0.0) * 10.0)))
    ///     .close();
    ///
    /// assert_eq!(result.unwrap(), ChainValue::from(20));
    /// ```
    ///
    /// A failing `f` notifies the handler (if set), then the failure surfaces
    /// from `close`:
    ///
    /// ```
    /// use fluent_chain::chain;
    ///
    /// let result = chain(2).chain(|_| Err("boom".into())).close();
    /// assert_eq!(result.unwrap_err().to_string(), "boom");
    /// ```
    pub fn chain<F>(self, f: F) -> Self
    where
        F: FnOnce(ChainValue) -> Result<ChainValue, TransformError>,
    {
        self.step(|value| Ok(f(value)?))
    }

    /// Maps each element of a sequence, preserving order.
    ///
    /// `f` receives the element, its index, and the whole sequence, matching
    /// the usual element-transform signature.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, sequence, ChainValue};
    ///
    /// let result = chain(vec![1, 2, 3])
    ///     .chain_map(|item, _, _| Ok(ChainValue::from(item.as_number().unwrap_or(0.0) + 2.0)))
    ///     .close();
    ///
    /// assert_eq!(result.unwrap(), sequence![3, 4, 5]);
    /// ```
    ///
    /// Any other shape fails validation before `f` runs:
    ///
    /// ```
    /// use fluent_chain::chain;
    ///
    /// let error = chain(3).chain_map(|item, _, _| Ok(item.clone())).close().unwrap_err();
    /// assert_eq!(error.to_string(), "chain_map expected an array, but was passed:3");
    /// ```
    pub fn chain_map<F>(self, mut f: F) -> Self
    where
        F: FnMut(&ChainValue, usize, &[ChainValue]) -> Result<ChainValue, TransformError>,
    {
        self.step(|value| match value {
            ChainValue::Sequence(items) => {
                let mut mapped = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    mapped.push(f(item, index, &items)?);
                }
                Ok(ChainValue::Sequence(mapped))
            },
            other => Err(StepFailure::shape("chain_map expected an array", &other)),
        })
    }

    /// Invokes `f` once per element of a sequence, set, or mapping, in
    /// iteration order, for its side effect only. The held value is kept; the
    /// results of `f` are discarded.
    ///
    /// The second argument carries the collection's native key shape: the
    /// index for a sequence, the element itself for a set, the entry key for
    /// a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue, IterKey};
    ///
    /// let mut seen = Vec::new();
    /// let result = chain(vec![11, 12, 13])
    ///     .chain_for_each(|item, key, _| {
    ///         if let (Some(number), IterKey::Index(index)) = (item.as_number(), key) {
    ///             seen.push((index, number));
    ///         }
    ///         Ok(())
    ///     })
    ///     .close();
    ///
    /// assert_eq!(seen, vec![(0, 11.0), (1, 12.0), (2, 13.0)]);
    /// assert_eq!(result.unwrap(), ChainValue::sequence([11, 12, 13]));
    /// ```
    pub fn chain_for_each<F>(self, mut f: F) -> Self
    where
        F: FnMut(&ChainValue, IterKey<'_>, &ChainValue) -> Result<(), TransformError>,
    {
        self.step(|value| {
            match &value {
                ChainValue::Sequence(items) => {
                    for (index, item) in items.iter().enumerate() {
                        f(item, IterKey::Index(index), &value)?;
                    }
                },
                ChainValue::Set(items) => {
                    for item in items {
                        f(item, IterKey::Element(item), &value)?;
                    }
                },
                ChainValue::Mapping(entries) => {
                    for (key, item) in entries {
                        f(item, IterKey::Key(key), &value)?;
                    }
                },
                other => {
                    return Err(StepFailure::shape("chain_for_each expects an array", other));
                },
            }
            Ok(value)
        })
    }

    /// Folds a sequence left-to-right into a single value.
    ///
    /// `f` receives the accumulator, the element, its index, and the whole
    /// sequence; the final accumulator becomes the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// let result = chain(vec![1, 2, 3])
    ///     .chain_reduce(
    ///         |acc, item, _, _| {
    ///             Ok(ChainValue::from(
    ///                 acc.as_number().unwrap_or(0.0) + item.as_number().unwrap_or(0.0),
    ///             ))
    ///         },
    ///         0,
    ///     )
    ///     .close();
    ///
    /// assert_eq!(result.unwrap(), ChainValue::from(6));
    /// ```
    pub fn chain_reduce<F>(self, mut f: F, initial: impl Into<ChainValue>) -> Self
    where
        F: FnMut(ChainValue, &ChainValue, usize, &[ChainValue]) -> Result<ChainValue, TransformError>,
    {
        let initial = initial.into();
        self.step(move |value| match value {
            ChainValue::Sequence(items) => {
                let mut accumulator = initial;
                for (index, item) in items.iter().enumerate() {
                    accumulator = f(accumulator, item, index, &items)?;
                }
                Ok(accumulator)
            },
            other => Err(StepFailure::shape("chain_reduce expected an array", &other)),
        })
    }

    /// Keeps the elements of a sequence for which `f` returns `true`,
    /// preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, sequence};
    ///
    /// let result = chain(vec![1, 2, 3, 4, 5])
    ///     .chain_filter(|item| Ok(item.as_number().unwrap_or(0.0) >= 3.0))
    ///     .close();
    ///
    /// assert_eq!(result.unwrap(), sequence![3, 4, 5]);
    /// ```
    pub fn chain_filter<F>(self, mut f: F) -> Self
    where
        F: FnMut(&ChainValue) -> Result<bool, TransformError>,
    {
        self.step(|value| match value {
            ChainValue::Sequence(items) => {
                let mut kept = Vec::new();
                for item in items {
                    if f(&item)? {
                        kept.push(item);
                    }
                }
                Ok(ChainValue::Sequence(kept))
            },
            other => Err(StepFailure::shape("chain_filter expects an array", &other)),
        })
    }

    /// Maps each element of a sequence and flattens one level: an `f` that
    /// returns a sequence contributes its elements, anything else is kept
    /// whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, sequence, ChainValue};
    ///
    /// let result = chain(vec![1, 2, 3])
    ///     .chain_flat_map(|item| {
    ///         let doubled = item.as_number().unwrap_or(0.0) * 2.0;
    ///         Ok(ChainValue::sequence([doubled, 1.0]))
    ///     })
    ///     .close();
    ///
    /// assert_eq!(result.unwrap(), sequence![2, 1, 4, 1, 6, 1]);
    /// ```
    pub fn chain_flat_map<F>(self, mut f: F) -> Self
    where
        F: FnMut(&ChainValue) -> Result<ChainValue, TransformError>,
    {
        self.step(|value| match value {
            ChainValue::Sequence(items) => {
                let mut flattened = Vec::new();
                for item in &items {
                    match f(item)? {
                        ChainValue::Sequence(nested) => flattened.extend(nested),
                        single => flattened.push(single),
                    }
                }
                Ok(ChainValue::Sequence(flattened))
            },
            other => Err(StepFailure::shape("chain_flat_map expects an array", &other)),
        })
    }

    /// Converts the held collection to a sequence.
    ///
    /// Sets keep their insertion order (and are duplicate-free by
    /// construction); sequences pass through; mappings become a sequence of
    /// `[key, value]` pair sequences. Scalar shapes fail validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, sequence, set};
    ///
    /// let result = chain(set!["a", "b", "c"]).to_array().close();
    /// assert_eq!(result.unwrap(), sequence!["a", "b", "c"]);
    /// ```
    pub fn to_array(self) -> Self {
        self.step(|value| match value {
            ChainValue::Sequence(items) | ChainValue::Set(items) => Ok(ChainValue::Sequence(items)),
            ChainValue::Mapping(entries) => Ok(ChainValue::Sequence(
                entries
                    .into_iter()
                    .map(|(key, item)| ChainValue::Sequence(vec![ChainValue::Text(key), item]))
                    .collect(),
            )),
            other => Err(StepFailure::shape("to_array expects a collection", &other)),
        })
    }

    /// Invokes `f` with the held value for its side effect only; the value is
    /// unchanged. Failure semantics match [`chain`](Chain::chain).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// let mut observed = None;
    /// let result = chain(2)
    ///     .execute(|value| {
    ///         observed = value.as_number();
    ///         Ok(())
    ///     })
    ///     .close();
    ///
    /// assert_eq!(observed, Some(2.0));
    /// assert_eq!(result.unwrap(), ChainValue::from(2));
    /// ```
    pub fn execute<F>(self, f: F) -> Self
    where
        F: FnOnce(&ChainValue) -> Result<(), TransformError>,
    {
        self.step(|value| {
            f(&value)?;
            Ok(value)
        })
    }

    /// Unconditionally replaces the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// assert_eq!(chain(2).replace(4).close().unwrap(), ChainValue::from(4));
    /// ```
    pub fn replace(self, value: impl Into<ChainValue>) -> Self {
        self.step(|_| Ok(value.into()))
    }

    /// Emits the current value once to the process-wide diagnostic sink (a
    /// `tracing` debug event), then continues the chain unchanged.
    ///
    /// Use [`debug_with`](Chain::debug_with) to substitute the sink.
    pub fn debug(self) -> Self {
        self.debug_with(|value| tracing::debug!(target: "fluent_chain", %value, "chain value"))
    }

    /// Emits the current value once to `sink`, then continues the chain
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// let mut captured = Vec::new();
    /// let result = chain(3)
    ///     .chain(|value| Ok(ChainValue::from(value.as_number().unwrap_or(0.0) + 3.0)))
    ///     .debug_with(|value| captured.push(value.to_string()))
    ///     .close();
    ///
    /// assert_eq!(captured, vec!["6".to_string()]);
    /// assert_eq!(result.unwrap(), ChainValue::from(6));
    /// ```
    pub fn debug_with<F>(self, mut sink: F) -> Self
    where
        F: FnMut(&ChainValue),
    {
        if let Ok(value) = &self.state {
            sink(value);
        }
        self
    }

    /// Sets (or replaces) the error observation handler for subsequent
    /// operations on this container. Clones taken afterwards share it.
    ///
    /// The handler sees each transformation failure exactly once; it never
    /// suppresses propagation, and shape-validation failures bypass it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use fluent_chain::chain;
    ///
    /// let notified = Rc::new(Cell::new(0));
    /// let observer = Rc::clone(&notified);
    ///
    /// let result = chain(2)
    ///     .error_handler(move |_| observer.set(observer.get() + 1))
    ///     .chain(|_| Err("boom".into()))
    ///     .close();
    ///
    /// assert!(result.is_err());
    /// assert_eq!(notified.get(), 1);
    /// ```
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ChainError) + 'static,
    {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Terminal operation: returns the held value, or the captured error.
    pub fn close(self) -> ChainResult {
        self.state
    }

    /// Terminal operation with a final transform. Failure semantics of `f`
    /// match [`chain`](Chain::chain).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, ChainValue};
    ///
    /// let result = chain(234)
    ///     .close_with(|value| Ok(ChainValue::from(value.as_number().unwrap_or(0.0) * 2.0)));
    ///
    /// assert_eq!(result.unwrap(), ChainValue::from(468));
    /// ```
    pub fn close_with<F>(self, f: F) -> ChainResult
    where
        F: FnOnce(ChainValue) -> Result<ChainValue, TransformError>,
    {
        self.chain(f).close()
    }

    /// Borrows the current value, or `None` once the chain has failed.
    #[inline]
    pub fn value(&self) -> Option<&ChainValue> {
        self.state.as_ref().ok()
    }

    /// Borrows the captured error, if the chain has failed.
    #[inline]
    pub fn error(&self) -> Option<&ChainError> {
        self.state.as_ref().err()
    }

    /// The container as a JSON object with a single `value` key.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::chain;
    ///
    /// let json = chain(2).to_json();
    /// assert_eq!(json["value"], serde_json::json!(2));
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        let value = match &self.state {
            Ok(value) => serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
            Err(_) => serde_json::Value::Null,
        };
        serde_json::json!({ "value": value })
    }

    /// Pretty-printed form of [`to_json`](Chain::to_json), identical to the
    /// [`Display`](fmt::Display) rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::chain;
    ///
    /// assert_eq!(chain(2).inspect(), "{\n  \"value\": 2\n}");
    /// ```
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// The rich-content bundle for notebook display: `text/plain` carries the
    /// current value's plain-text form. A failed container produces an empty
    /// bundle.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::{chain, RichContent};
    ///
    /// assert_eq!(chain(2).display_data(), RichContent::plain("2"));
    /// ```
    pub fn display_data(&self) -> RichContent {
        match &self.state {
            Ok(value) => RichContent::plain(value.to_string()),
            Err(_) => RichContent::default(),
        }
    }
}

/// Renders as `{"value": <v>}` with 2-space indentation.
///
/// ```
/// use fluent_chain::chain;
///
/// assert_eq!(chain(2).to_string(), "{\n  \"value\": 2\n}");
/// ```
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.to_json()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("state", &self.state)
            .field("handler_set", &self.handler.is_some())
            .finish()
    }
}

//! The dynamically-shaped value held by a [`Chain`](crate::types::Chain).
//!
//! Notebook cells hand the chain whatever they have on hand: numbers, text,
//! arrays, sets, keyed maps. [`ChainValue`] models those shapes as an explicit
//! tagged union so every chain operation can branch on shape up front instead
//! of probing at runtime.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::ChainValue;
//!
//! let names = ChainValue::sequence(["ada", "grace"]);
//! assert!(names.is_sequence());
//!
//! let unique = ChainValue::set([1, 1, 2]);
//! assert_eq!(unique, ChainValue::set([1, 2]));
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A value flowing through a chain, classified by shape.
///
/// Scalar shapes (`Null`, `Bool`, `Number`, `Text`) pass through chain
/// operations untouched; collection shapes (`Sequence`, `Set`, `Mapping`)
/// unlock the collection-aware operations like
/// [`chain_map`](crate::types::Chain::chain_map) and
/// [`chain_for_each`](crate::types::Chain::chain_for_each).
///
/// Numbers are IEEE-754 doubles. Integral numbers serialize without a
/// fractional part and non-finite numbers serialize as JSON `null`.
///
/// # Examples
///
/// ```
/// use fluent_chain::ChainValue;
///
/// let value = ChainValue::from(2);
/// assert_eq!(value.to_string(), "2");
/// assert_eq!(serde_json::to_string(&value).unwrap(), "2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChainValue {
    /// Absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An IEEE-754 double.
    Number(f64),
    /// A text string.
    Text(String),
    /// An ordered collection, duplicates allowed.
    Sequence(Vec<ChainValue>),
    /// An insertion-ordered collection without duplicates.
    Set(Vec<ChainValue>),
    /// Insertion-ordered key/value entries.
    Mapping(Vec<(String, ChainValue)>),
}

impl ChainValue {
    /// Builds a [`Sequence`](Self::Sequence) from anything iterable.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::ChainValue;
    ///
    /// let seq = ChainValue::sequence([1, 2, 3]);
    /// assert_eq!(seq.as_sequence().map(<[ChainValue]>::len), Some(3));
    /// ```
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChainValue>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Builds a [`Set`](Self::Set), dropping duplicates.
    ///
    /// The first occurrence of each element wins and insertion order is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::ChainValue;
    ///
    /// let set = ChainValue::set(["a", "b", "a"]);
    /// assert_eq!(set, ChainValue::set(["a", "b"]));
    /// ```
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChainValue>,
    {
        let mut unique: Vec<ChainValue> = Vec::new();
        for item in items {
            let item = item.into();
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self::Set(unique)
    }

    /// Builds a [`Mapping`](Self::Mapping) from key/value pairs.
    ///
    /// A repeated key replaces the earlier entry's value in place, so the
    /// position of the first occurrence is kept.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ChainValue>,
    {
        let mut collected: Vec<(String, ChainValue)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            match collected.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => collected.push((key, value)),
            }
        }
        Self::Mapping(collected)
    }

    /// Returns `true` for [`Null`](Self::Null).
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Sequence`](Self::Sequence).
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for [`Set`](Self::Set).
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns `true` for [`Mapping`](Self::Mapping).
    #[inline]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns `true` for any collection shape.
    #[inline]
    pub fn is_collection(&self) -> bool {
        self.is_sequence() || self.is_set() || self.is_mapping()
    }

    /// Script-style truthiness: `Null`, `false`, zero or NaN numbers, and
    /// empty text are falsy; collections are always truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_chain::ChainValue;
    ///
    /// assert!(ChainValue::Null.is_falsy());
    /// assert!(ChainValue::from(0).is_falsy());
    /// assert!(!ChainValue::sequence::<_, ChainValue>([]).is_falsy());
    /// ```
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::Number(number) => *number == 0.0 || number.is_nan(),
            Self::Text(text) => text.is_empty(),
            Self::Sequence(_) | Self::Set(_) | Self::Mapping(_) => false,
        }
    }

    /// Borrows the number, if this is a [`Number`](Self::Number).
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Borrows the text, if this is a [`Text`](Self::Text).
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrows the boolean, if this is a [`Bool`](Self::Bool).
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Borrows the elements, if this is a [`Sequence`](Self::Sequence).
    #[inline]
    pub fn as_sequence(&self) -> Option<&[ChainValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the entries, if this is a [`Mapping`](Self::Mapping).
    #[inline]
    pub fn as_mapping(&self) -> Option<&[(String, ChainValue)]> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Plain-text rendering, used in shape-validation messages and the
/// `text/plain` rich-content field: scalars as written, sequences and sets
/// comma-joined, mappings as `{key: value, ...}`.
impl fmt::Display for ChainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Sequence(items) | Self::Set(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Self::Mapping(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
        }
    }
}

impl Serialize for ChainValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => {
                // Integral doubles serialize as integers, matching how
                // notebook frontends print them.
                if number.is_finite()
                    && number.fract() == 0.0
                    && *number >= i64::MIN as f64
                    && *number <= i64::MAX as f64
                {
                    serializer.serialize_i64(*number as i64)
                } else {
                    serializer.serialize_f64(*number)
                }
            },
            Self::Text(text) => serializer.serialize_str(text),
            Self::Sequence(items) | Self::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            },
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
        }
    }
}

impl From<bool> for ChainValue {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for ChainValue {
    #[inline]
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for ChainValue {
    #[inline]
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),+) => {
        $(
            impl From<$int> for ChainValue {
                #[inline]
                fn from(number: $int) -> Self {
                    Self::Number(number as f64)
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for ChainValue {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ChainValue {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T> From<Option<T>> for ChainValue
where
    T: Into<ChainValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

impl<T> From<Vec<T>> for ChainValue
where
    T: Into<ChainValue>,
{
    fn from(items: Vec<T>) -> Self {
        Self::sequence(items)
    }
}

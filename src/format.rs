//! Pure formatting helpers for printing and bucketing values.
//!
//! Everything here is stateless: zero-filling numbers, decomposing millisecond
//! durations, truncating display strings with an ellipsis, and mapping values
//! between numeric domains.
//!
//! # Examples
//!
//! ```
//! use fluent_chain::format;
//!
//! assert_eq!(format::zero_fill(23), "023");
//! assert_eq!(format::millisecond_duration(2000).seconds, 2);
//! assert_eq!(format::map_domain(5.0, [0.0, 10.0]), 0.5);
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::types::value::ChainValue;

/// The glyph appended by [`ellipsify`] when a string is truncated.
pub const ELLIPSIS: char = '\u{2026}';

/// Character limit used by [`ellipsify`] when none is given.
pub const DEFAULT_ELLIPSIFY_LEN: usize = 50;

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: i64 = 1000;
/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Failures from the domain-mapping helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// [`map_array_domain`] was given nothing to bucket into.
    #[error("map_array_domain: target array is not a populated array")]
    EmptyTargetArray,
}

/// Pads the display form of `num` at the start with zeroes until it is three
/// characters long.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::zero_fill;
///
/// assert_eq!(zero_fill(23), "023");
/// assert_eq!(zero_fill(1234), "1234");
/// ```
pub fn zero_fill(num: impl fmt::Display) -> String {
    zero_fill_with(num, 3, '0')
}

/// Pads the display form of `num` at the start with `fill` until it is `len`
/// characters long; already-long-enough strings are returned unchanged.
///
/// The sign participates in the padded string, so negative numbers pad
/// between the fill and the minus sign's rendered position — the same as
/// padding the finished string.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::zero_fill_with;
///
/// assert_eq!(zero_fill_with(23, 5, '0'), "00023");
/// assert_eq!(zero_fill_with(23, 5, ' '), "   23");
/// ```
pub fn zero_fill_with(num: impl fmt::Display, len: usize, fill: char) -> String {
    let rendered = num.to_string();
    let count = rendered.chars().count();
    if count >= len {
        return rendered;
    }
    let mut padded = String::with_capacity(rendered.len() + (len - count) * fill.len_utf8());
    padded.extend(std::iter::repeat(fill).take(len - count));
    padded.push_str(&rendered);
    padded
}

/// Quotient and remainder of a truncating division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Division {
    /// The quotient truncated toward zero.
    pub integer: f64,
    /// The remainder, carrying the dividend's sign.
    pub remainder: f64,
}

/// Divides with truncating semantics, keeping the pieces.
///
/// Division by zero follows IEEE-754: the quotient is signed infinity (NaN
/// for `0 / 0`) and the remainder is NaN.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::divide_with_remainder;
///
/// let result = divide_with_remainder(5.0, 3.0);
/// assert_eq!(result.integer, 1.0);
/// assert_eq!(result.remainder, 2.0);
///
/// let by_zero = divide_with_remainder(3.0, 0.0);
/// assert_eq!(by_zero.integer, f64::INFINITY);
/// assert!(by_zero.remainder.is_nan());
/// ```
pub fn divide_with_remainder(numerator: f64, denominator: f64) -> Division {
    Division {
        integer: (numerator / denominator).trunc(),
        remainder: numerator % denominator,
    }
}

/// A millisecond duration decomposed into calendar-free components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MillisecondDuration {
    /// Whole days.
    pub days: i64,
    /// Whole hours after the days are removed.
    pub hours: i64,
    /// Whole minutes after the hours are removed.
    pub minutes: i64,
    /// Whole seconds after the minutes are removed.
    pub seconds: i64,
    /// Leftover milliseconds.
    pub milliseconds: i64,
    /// The original input, untouched.
    pub epoch: i64,
}

/// Decomposes a millisecond count by successive truncating division through
/// days, hours, minutes, and seconds.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::millisecond_duration;
///
/// let duration = millisecond_duration(2000);
/// assert_eq!(duration.seconds, 2);
/// assert_eq!(duration.milliseconds, 0);
/// assert_eq!(duration.epoch, 2000);
/// ```
pub fn millisecond_duration(ms: i64) -> MillisecondDuration {
    let days = ms / MILLIS_PER_DAY;
    let rest = ms % MILLIS_PER_DAY;
    let hours = rest / MILLIS_PER_HOUR;
    let rest = rest % MILLIS_PER_HOUR;
    let minutes = rest / MILLIS_PER_MINUTE;
    let rest = rest % MILLIS_PER_MINUTE;
    let seconds = rest / MILLIS_PER_SECOND;
    let milliseconds = rest % MILLIS_PER_SECOND;

    MillisecondDuration { days, hours, minutes, seconds, milliseconds, epoch: ms }
}

/// Truncates the display form of a value to `max_len` characters, appending a
/// single [`ELLIPSIS`] when anything was cut.
///
/// Falsy inputs (null, `false`, zero or NaN numbers, empty text) become the
/// empty string. Text is used as-is; any other shape is JSON-serialized
/// first. A `max_len` of zero falls back to [`DEFAULT_ELLIPSIFY_LEN`].
///
/// # Examples
///
/// ```
/// use fluent_chain::format::ellipsify;
/// use fluent_chain::ChainValue;
///
/// assert_eq!(ellipsify("0123456789", 5), "01234\u{2026}");
/// assert_eq!(ellipsify("0123456789", 20), "0123456789");
/// assert_eq!(ellipsify(ChainValue::Null, 10), "");
/// ```
pub fn ellipsify(value: impl Into<ChainValue>, max_len: usize) -> String {
    let value = value.into();
    if value.is_falsy() {
        return String::new();
    }

    let rendered = match &value {
        ChainValue::Text(text) => text.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    };

    let limit = if max_len == 0 { DEFAULT_ELLIPSIFY_LEN } else { max_len };
    if rendered.chars().count() <= limit {
        return rendered;
    }

    let mut truncated: String = rendered.chars().take(limit).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Linearly maps `value` from `domain` onto the unit range, clamping at the
/// domain boundaries.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::map_domain;
///
/// assert_eq!(map_domain(-2.0, [0.0, 10.0]), 0.0);
/// assert_eq!(map_domain(5.0, [0.0, 10.0]), 0.5);
/// assert_eq!(map_domain(12.0, [0.0, 10.0]), 1.0);
/// ```
pub fn map_domain(value: f64, domain: [f64; 2]) -> f64 {
    map_domain_to(value, domain, [0.0, 1.0])
}

/// Linearly maps `value` from `domain` onto `range`, clamping at the domain
/// boundaries.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::map_domain_to;
///
/// assert_eq!(map_domain_to(0.5, [0.0, 1.0], [0.0, 10.0]), 5.0);
/// ```
pub fn map_domain_to(value: f64, domain: [f64; 2], range: [f64; 2]) -> f64 {
    let [domain_min, domain_max] = domain;
    let [range_min, range_max] = range;

    if value <= domain_min {
        return range_min;
    }
    if value >= domain_max {
        return range_max;
    }
    range_min + (value - domain_min) * (range_max - range_min) / (domain_max - domain_min)
}

/// Picks the element of `target` that `value` falls on under the unit domain.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::map_array_domain;
///
/// let letters = ["a", "b", "c", "d", "e"];
/// assert_eq!(map_array_domain(0.5, &letters), Ok(&"c"));
/// ```
pub fn map_array_domain<T>(value: f64, target: &[T]) -> Result<&T, FormatError> {
    map_array_domain_in(value, target, [0.0, 1.0])
}

/// Picks the element of `target` that `value` falls on under `domain`.
///
/// Values at or beyond the domain boundaries clamp to the first/last element;
/// in between, the domain is cut into `target.len()` equal buckets and the
/// bucket index selects the element.
///
/// # Errors
///
/// Fails with [`FormatError::EmptyTargetArray`] when `target` is empty.
///
/// # Examples
///
/// ```
/// use fluent_chain::format::{map_array_domain_in, FormatError};
///
/// let buckets = [0, 1, 2, 3, 4];
/// assert_eq!(map_array_domain_in(2.0, &buckets, [1.0, 6.0]), Ok(&1));
/// assert_eq!(map_array_domain_in(6.1, &buckets, [1.0, 6.0]), Ok(&4));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(
///     map_array_domain_in(0.5, &empty, [0.0, 1.0]),
///     Err(FormatError::EmptyTargetArray),
/// );
/// ```
pub fn map_array_domain_in<T>(value: f64, target: &[T], domain: [f64; 2]) -> Result<&T, FormatError> {
    if target.is_empty() {
        return Err(FormatError::EmptyTargetArray);
    }

    let last = target.len() - 1;
    if value <= domain[0] {
        return Ok(&target[0]);
    }
    if value >= domain[1] {
        return Ok(&target[last]);
    }

    let bucket = map_domain_to(value, domain, [0.0, target.len() as f64]).floor() as usize;
    Ok(&target[bucket.min(last)])
}

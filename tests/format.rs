use fluent_chain::format::{
    divide_with_remainder, ellipsify, map_array_domain, map_array_domain_in, map_domain,
    map_domain_to, millisecond_duration, zero_fill, zero_fill_with, FormatError,
    MillisecondDuration, DEFAULT_ELLIPSIFY_LEN, ELLIPSIS, MILLIS_PER_DAY, MILLIS_PER_HOUR,
    MILLIS_PER_MINUTE,
};
use fluent_chain::{mapping, ChainValue};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}",
    );
}

// ============================================================================
// zero_fill
// ============================================================================

#[test]
fn test_zero_fill_pads_a_normal_number() {
    assert_eq!(zero_fill(3), "003");
}

#[test]
fn test_zero_fill_with_a_wider_length() {
    assert_eq!(zero_fill_with(23, 5, '0'), "00023");
}

#[test]
fn test_zero_fill_with_spaces() {
    assert_eq!(zero_fill_with(23, 5, ' '), "   23");
}

#[test]
fn test_zero_fill_leaves_long_numbers_alone() {
    assert_eq!(zero_fill(1234), "1234");
}

// ============================================================================
// divide_with_remainder
// ============================================================================

#[test]
fn test_divide_five_by_three() {
    let result = divide_with_remainder(5.0, 3.0);
    assert_eq!(result.integer, 1.0);
    assert_eq!(result.remainder, 2.0);
}

#[test]
fn test_divide_zero_by_three() {
    let result = divide_with_remainder(0.0, 3.0);
    assert_eq!(result.integer, 0.0);
    assert_eq!(result.remainder, 0.0);
}

#[test]
fn test_divide_three_by_zero() {
    let result = divide_with_remainder(3.0, 0.0);
    assert_eq!(result.integer, f64::INFINITY);
    assert!(result.remainder.is_nan());
}

#[test]
fn test_divide_negative_three_by_zero() {
    let result = divide_with_remainder(-3.0, 0.0);
    assert_eq!(result.integer, f64::NEG_INFINITY);
    assert!(result.remainder.is_nan());
}

// ============================================================================
// millisecond_duration
// ============================================================================

#[test]
fn test_duration_of_two_seconds() {
    let duration = 2000;
    assert_eq!(
        millisecond_duration(duration),
        MillisecondDuration {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 2,
            milliseconds: 0,
            epoch: duration,
        },
    );
}

#[test]
fn test_duration_of_two_minutes() {
    let duration = 2 * MILLIS_PER_MINUTE;
    assert_eq!(
        millisecond_duration(duration),
        MillisecondDuration {
            days: 0,
            hours: 0,
            minutes: 2,
            seconds: 0,
            milliseconds: 0,
            epoch: duration,
        },
    );
}

#[test]
fn test_duration_of_two_hours() {
    let duration = 2 * MILLIS_PER_HOUR;
    assert_eq!(
        millisecond_duration(duration),
        MillisecondDuration {
            days: 0,
            hours: 2,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
            epoch: duration,
        },
    );
}

#[test]
fn test_duration_of_two_days() {
    let duration = 2 * MILLIS_PER_DAY;
    assert_eq!(
        millisecond_duration(duration),
        MillisecondDuration {
            days: 2,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
            epoch: duration,
        },
    );
}

#[test]
fn test_duration_spanning_every_component() {
    // 36 days, 10 hours, 16 minutes, 20 seconds.
    let duration =
        36 * MILLIS_PER_DAY + 10 * MILLIS_PER_HOUR + 16 * MILLIS_PER_MINUTE + 20 * 1000;
    assert_eq!(
        millisecond_duration(duration),
        MillisecondDuration {
            days: 36,
            hours: 10,
            minutes: 16,
            seconds: 20,
            milliseconds: 0,
            epoch: duration,
        },
    );
}

// ============================================================================
// ellipsify
// ============================================================================

#[test]
fn test_ellipsify_truncates_a_long_string() {
    assert_eq!(ellipsify("0123456789", 5), format!("01234{ELLIPSIS}"));
}

#[test]
fn test_ellipsify_leaves_a_short_string_alone() {
    assert_eq!(ellipsify("0123456789", 20), "0123456789");
}

#[test]
fn test_ellipsify_leaves_an_exact_length_string_alone() {
    assert_eq!(ellipsify("0123456789", 10), "0123456789");
}

#[test]
fn test_ellipsify_applies_the_default_length_for_zero() {
    let long: String = "0123456789".repeat(5) + "1";
    let expected = format!("{}{ELLIPSIS}", &long[..DEFAULT_ELLIPSIFY_LEN]);
    assert_eq!(ellipsify(long, 0), expected);
}

#[test]
fn test_ellipsify_of_null_is_empty() {
    assert_eq!(ellipsify(ChainValue::Null, 10), "");
}

#[test]
fn test_ellipsify_of_falsy_values_is_empty() {
    assert_eq!(ellipsify(0, 10), "");
    assert_eq!(ellipsify(false, 10), "");
    assert_eq!(ellipsify("", 10), "");
}

#[test]
fn test_ellipsify_serializes_an_object_first() {
    let value = mapping! { "first" => "name", "last" => "name" };
    assert_eq!(ellipsify(value, 10), format!("{{\"first\":\"{ELLIPSIS}"));
}

// ============================================================================
// map_domain
// ============================================================================

#[test]
fn test_map_domain_clamps_below_the_domain() {
    assert_close(map_domain_to(-2.0, [1.0, 10.0], [0.0, 1.0]), 0.0);
}

#[test]
fn test_map_domain_at_the_domain_minimum() {
    assert_close(map_domain_to(0.0, [0.0, 10.0], [0.0, 1.0]), 0.0);
}

#[test]
fn test_map_domain_at_the_halfway_point() {
    assert_close(map_domain_to(5.0, [0.0, 10.0], [0.0, 1.0]), 0.5);
}

#[test]
fn test_map_domain_clamps_above_the_domain() {
    assert_close(map_domain_to(12.0, [0.0, 10.0], [0.0, 1.0]), 1.0);
}

#[test]
fn test_map_domain_scales_into_a_wider_range() {
    assert_close(map_domain_to(0.5, [0.0, 1.0], [0.0, 10.0]), 5.0);
}

#[test]
fn test_map_domain_onto_a_circle() {
    let tau = std::f64::consts::PI * 2.0;
    assert_close(map_domain_to(0.5, [0.0, 1.0], [0.0, tau]), std::f64::consts::PI);
}

#[test]
fn test_map_domain_defaults_to_the_unit_range() {
    assert_close(map_domain(12.0, [0.0, 10.0]), 1.0);
}

// ============================================================================
// map_array_domain
// ============================================================================

const TARGET: [i32; 5] = [0, 1, 2, 3, 4];

#[test]
fn test_map_array_domain_below_the_minimum() {
    assert_eq!(map_array_domain_in(-0.5, &TARGET, [0.0, 1.0]), Ok(&0));
}

#[test]
fn test_map_array_domain_above_the_maximum() {
    assert_eq!(map_array_domain_in(1.2, &TARGET, [0.0, 1.0]), Ok(&4));
}

#[test]
fn test_map_array_domain_at_the_boundaries() {
    assert_eq!(map_array_domain_in(0.0, &TARGET, [0.0, 1.0]), Ok(&0));
    assert_eq!(map_array_domain_in(1.0, &TARGET, [0.0, 1.0]), Ok(&4));
}

#[test]
fn test_map_array_domain_with_an_offset_domain() {
    let domain = [1.0, 6.0];
    assert_eq!(map_array_domain_in(0.9, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(1.0, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(1.00001, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(1.5, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(1.999, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(2.0, &TARGET, domain), Ok(&1));
    assert_eq!(map_array_domain_in(2.000001, &TARGET, domain), Ok(&1));
    assert_eq!(map_array_domain_in(4.9999, &TARGET, domain), Ok(&3));
    assert_eq!(map_array_domain_in(5.0, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(5.0001, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(5.999999999, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(6.0, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(6.1, &TARGET, domain), Ok(&4));
}

#[test]
fn test_map_array_domain_with_a_zero_based_domain() {
    let domain = [0.0, 5.0];
    assert_eq!(map_array_domain_in(-0.1, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(0.0, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(0.999, &TARGET, domain), Ok(&0));
    assert_eq!(map_array_domain_in(1.0, &TARGET, domain), Ok(&1));
    assert_eq!(map_array_domain_in(2.5, &TARGET, domain), Ok(&2));
    assert_eq!(map_array_domain_in(3.9999, &TARGET, domain), Ok(&3));
    assert_eq!(map_array_domain_in(4.0, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(4.999999999, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(5.0, &TARGET, domain), Ok(&4));
    assert_eq!(map_array_domain_in(5.1, &TARGET, domain), Ok(&4));
}

#[test]
fn test_map_array_domain_with_the_default_domain() {
    assert_eq!(map_array_domain(-0.0001, &TARGET), Ok(&0));
    assert_eq!(map_array_domain(0.0, &TARGET), Ok(&0));
    assert_eq!(map_array_domain(0.00001, &TARGET), Ok(&0));
    assert_eq!(map_array_domain(0.1999, &TARGET), Ok(&0));
    assert_eq!(map_array_domain(0.2, &TARGET), Ok(&1));
    assert_eq!(map_array_domain(0.2000001, &TARGET), Ok(&1));
    assert_eq!(map_array_domain(0.5, &TARGET), Ok(&2));
    assert_eq!(map_array_domain(0.79999, &TARGET), Ok(&3));
    assert_eq!(map_array_domain(0.8001, &TARGET), Ok(&4));
    assert_eq!(map_array_domain(0.9999, &TARGET), Ok(&4));
    assert_eq!(map_array_domain(1.0, &TARGET), Ok(&4));
    assert_eq!(map_array_domain(1.001, &TARGET), Ok(&4));
}

#[test]
fn test_map_array_domain_picks_the_middle_letter() {
    let letters = ["a", "b", "c", "d", "e"];
    assert_eq!(map_array_domain(0.5, &letters), Ok(&"c"));
}

#[test]
fn test_map_array_domain_rejects_an_empty_target() {
    let empty: [i32; 0] = [];
    let error = map_array_domain_in(0.5, &empty, [0.0, 1.0]).unwrap_err();
    assert_eq!(error, FormatError::EmptyTargetArray);
    assert_eq!(
        error.to_string(),
        "map_array_domain: target array is not a populated array",
    );
}

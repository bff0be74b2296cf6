use crate::core::models::expense::{SplitDetail, SplitMethod};
use crate::core::split::validate_split;
use crate::tests::{detail, detail_without_amount};
use serde_json::json;

#[test]
fn test_equal_split_is_always_valid() {
    assert!(validate_split("equal", 100.0, &[]));
    assert!(validate_split("equal", 42.5, &[detail("a", 1.0), detail("b", 999.0)]));
    assert!(validate_split("equal", 0.0, &[detail("a", -5.0)]));
}

#[test]
fn test_exact_split_must_sum_to_total() {
    assert!(validate_split("exact", 100.0, &[detail("a", 60.0), detail("b", 40.0)]));
    assert!(!validate_split("exact", 100.0, &[detail("a", 60.0), detail("b", 30.0)]));
    assert!(!validate_split("exact", 100.0, &[detail("a", 60.0), detail("b", 50.0)]));
}

#[test]
fn test_exact_split_tolerates_float_noise() {
    assert!(validate_split("exact", 0.3, &[detail("a", 0.1), detail("b", 0.2)]));
    assert!(validate_split(
        "exact",
        10.0,
        &[detail("a", 3.33), detail("b", 3.33), detail("c", 3.34)]
    ));
}

#[test]
fn test_exact_split_rejects_a_full_minor_unit() {
    assert!(!validate_split("exact", 100.0, &[detail("a", 60.0), detail("b", 39.99)]));
    assert!(!validate_split("exact", 100.0, &[detail("a", 60.0), detail("b", 40.01)]));
}

#[test]
fn test_percentage_split_must_sum_to_hundred() {
    assert!(validate_split("percentage", 80.0, &[detail("a", 50.0), detail("b", 50.0)]));
    assert!(validate_split("percentage", 1.0, &[detail("a", 12.5), detail("b", 87.5)]));
    assert!(!validate_split("percentage", 80.0, &[detail("a", 50.0), detail("b", 40.0)]));
    // The total amount plays no part in a percentage split.
    assert!(!validate_split("percentage", 80.0, &[detail("a", 40.0), detail("b", 40.0)]));
}

#[test]
fn test_empty_details() {
    assert!(!validate_split("exact", 100.0, &[]));
    assert!(validate_split("exact", 0.0, &[]));
    assert!(!validate_split("percentage", 100.0, &[]));
}

#[test]
fn test_unknown_method_is_invalid() {
    assert!(!validate_split("bogus", 100.0, &[detail("a", 100.0)]));
    assert!(!validate_split("", 100.0, &[]));
    assert!(!validate_split("EQUAL", 100.0, &[]));
}

#[test]
fn test_non_finite_amounts_are_invalid() {
    assert!(!validate_split("exact", 100.0, &[detail("a", f64::NAN)]));
    assert!(!validate_split("percentage", 100.0, &[detail("a", f64::INFINITY)]));
}

#[test]
fn test_missing_amount_invalidates_exact_and_percentage() {
    let details = [detail("a", 100.0), detail_without_amount("b")];
    assert!(!validate_split("exact", 100.0, &details));
    assert!(!validate_split("percentage", 100.0, &details));
    assert!(!validate_split("exact", 0.0, &[detail_without_amount("a")]));
    assert!(validate_split("equal", 100.0, &details));
    assert!(validate_split("equal", 100.0, &[detail_without_amount("a")]));
}

#[test]
fn test_split_detail_amount_is_optional_when_decoding() {
    let details: Vec<SplitDetail> =
        serde_json::from_value(json!([{ "userId": "a", "amount": 100.0 }, { "userId": "b" }])).unwrap();
    assert_eq!(details[0].amount, Some(100.0));
    assert_eq!(details[1].amount, None);
    assert!(!validate_split("exact", 100.0, &details));

    let encoded = serde_json::to_value(&details).unwrap();
    assert_eq!(encoded[1], json!({ "userId": "b" }));
}

#[test]
fn test_split_method_validate_matches_validate_split() {
    let details = [detail("a", 25.0), detail("b", 75.0)];
    assert!(SplitMethod::Percentage.validate(10.0, &details));
    assert!(!SplitMethod::Exact.validate(10.0, &details));
    assert!(SplitMethod::Exact.validate(100.0, &details));
    assert!(SplitMethod::Equal.validate(10.0, &details));
}

#[test]
fn test_split_method_parsing() {
    assert_eq!("equal".parse::<SplitMethod>(), Ok(SplitMethod::Equal));
    assert_eq!("exact".parse::<SplitMethod>(), Ok(SplitMethod::Exact));
    assert_eq!("percentage".parse::<SplitMethod>(), Ok(SplitMethod::Percentage));
    assert!("shares".parse::<SplitMethod>().is_err());
    assert_eq!(SplitMethod::Percentage.to_string(), "percentage");
}

//! Split validation.
//!
//! An `equal` split needs no per-participant amounts. An `exact` split must add
//! up to the expense total and a `percentage` split must add up to 100. Sums are
//! compared within [`SPLIT_TOLERANCE`] so that float rounding noise does not
//! reject a correct split. Every entry of an `exact` or `percentage` split must
//! carry an amount.

use std::str::FromStr;

use crate::constants::{PERCENTAGE_TOTAL, SPLIT_TOLERANCE};
use crate::core::models::expense::{SplitDetail, SplitMethod};

/// Returns whether `split_details` are consistent with `method` and `total_amount`.
///
/// `method` is the raw method name as received; unknown names are invalid.
/// Participant ids in the details are not inspected.
pub fn validate_split(method: &str, total_amount: f64, split_details: &[SplitDetail]) -> bool {
    match SplitMethod::from_str(method) {
        Ok(method) => validate_parsed(method, total_amount, split_details),
        Err(_) => false,
    }
}

pub(crate) fn validate_parsed(method: SplitMethod, total_amount: f64, split_details: &[SplitDetail]) -> bool {
    match method {
        SplitMethod::Equal => true,
        SplitMethod::Exact => detail_sum(split_details).is_some_and(|sum| within_tolerance(sum, total_amount)),
        SplitMethod::Percentage => {
            detail_sum(split_details).is_some_and(|sum| within_tolerance(sum, PERCENTAGE_TOTAL))
        }
    }
}

/// `None` as soon as one entry has no amount.
fn detail_sum(split_details: &[SplitDetail]) -> Option<f64> {
    split_details.iter().map(|d| d.amount).sum()
}

// NaN never compares below the tolerance, so non-finite input is rejected.
fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < SPLIT_TOLERANCE
}

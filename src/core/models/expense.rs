use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::core::split;

/// How an expense's amount is divided among its participants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    Equal,
    Exact,
    Percentage,
}

impl SplitMethod {
    /// Checks `details` against this method and `total_amount`.
    pub fn validate(&self, total_amount: f64, details: &[SplitDetail]) -> bool {
        split::validate_parsed(*self, total_amount, details)
    }
}

impl std::fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SplitMethod::Equal => "equal",
            SplitMethod::Exact => "exact",
            SplitMethod::Percentage => "percentage",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SplitMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(SplitMethod::Equal),
            "exact" => Ok(SplitMethod::Exact),
            "percentage" => Ok(SplitMethod::Percentage),
            other => Err(format!("unknown split method `{}`", other)),
        }
    }
}

/// One participant's entry in an expense split. `amount` is a currency amount
/// for exact splits, percentage points for percentage splits and unused for
/// equal splits. Exact and percentage splits reject entries without one.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitDetail {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub split_method: SplitMethod,
    pub split_details: Vec<SplitDetail>,
    pub created_by: String,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }
}

/// Input for recording an expense. The split method stays a raw string until
/// validation so that unknown methods are reported as invalid splits.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub split_method: String,
    pub split_details: Vec<SplitDetail>,
    pub participants: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct CreatorSummary {
    pub id: String,
    pub name: Option<String>,
}

/// An expense with its creator's display name resolved.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseWithCreator {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub split_method: SplitMethod,
    pub split_details: Vec<SplitDetail>,
    pub created_by: CreatorSummary,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseWithCreator {
    pub fn new(expense: Expense, creator_name: Option<String>) -> Self {
        ExpenseWithCreator {
            created_by: CreatorSummary {
                id: expense.created_by,
                name: creator_name,
            },
            id: expense.id,
            title: expense.title,
            amount: expense.amount,
            split_method: expense.split_method,
            split_details: expense.split_details,
            participants: expense.participants,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

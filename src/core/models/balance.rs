use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-participant totals across a set of expenses. Derived on demand, never stored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub total_paid: f64,
    pub total_owed: f64,
    pub net_balance: f64,
}

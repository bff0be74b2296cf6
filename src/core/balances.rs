use std::collections::BTreeMap;

use crate::core::models::balance::BalanceEntry;
use crate::core::models::expense::Expense;

#[derive(Default)]
struct Totals {
    paid: f64,
    owed: f64,
}

/// Computes paid, owed and net totals per participant over `expenses`.
///
/// Every expense is shared equally among its participants for the owed side,
/// whatever its recorded split method. The creator is credited with the full
/// amount only when they are also a participant. Expenses without participants
/// contribute nothing.
///
/// Results are keyed by user id and rounded to two decimals; the output does not
/// depend on the order of `expenses`.
pub fn compute_balances(expenses: &[Expense]) -> BTreeMap<String, BalanceEntry> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();

    for expense in expenses {
        if expense.participants.is_empty() {
            continue;
        }
        let split_amount = expense.amount / expense.participants.len() as f64;
        for participant in &expense.participants {
            let entry = totals.entry(participant.as_str()).or_default();
            entry.owed += split_amount;
            if *participant == expense.created_by {
                entry.paid += expense.amount;
            }
        }
    }

    totals
        .into_iter()
        .map(|(user_id, t)| {
            (
                user_id.to_string(),
                BalanceEntry {
                    total_paid: round2(t.paid),
                    total_owed: round2(t.owed),
                    net_balance: round2(t.paid - t.owed),
                },
            )
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0.
    (value * 100.0).round() / 100.0 + 0.0
}

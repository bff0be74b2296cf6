mod split_tests;
mod user_tests;

use crate::core::models::expense::{Expense, NewExpense, SplitDetail, SplitMethod};
use crate::core::models::user::User;
use crate::core::services::SplitsheetService;
use crate::infrastructure::export::csv::CsvExportWriter;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub const TEST_SECRET: &str = "test-secret";

pub fn create_test_service() -> SplitsheetService<InMemoryLogging, InMemoryStorage, CsvExportWriter> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let exporter = CsvExportWriter::new();
    SplitsheetService::new(storage, logging, exporter, TEST_SECRET.to_string()).with_hash_cost(4)
}

pub async fn register(
    service: &SplitsheetService<InMemoryLogging, InMemoryStorage, CsvExportWriter>,
    name: &str,
) -> User {
    service
        .register_user(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "password123".to_string(),
        )
        .await
        .unwrap()
}

pub fn detail(user_id: &str, amount: f64) -> SplitDetail {
    SplitDetail {
        user_id: user_id.to_string(),
        amount: Some(amount),
    }
}

pub fn detail_without_amount(user_id: &str) -> SplitDetail {
    SplitDetail {
        user_id: user_id.to_string(),
        amount: None,
    }
}

pub fn new_expense(title: &str, amount: f64, method: &str, details: Vec<SplitDetail>, participants: &[&str]) -> NewExpense {
    NewExpense {
        title: title.to_string(),
        amount,
        split_method: method.to_string(),
        split_details: details,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// A stored expense built directly, bypassing service validation.
pub fn expense(id: &str, amount: f64, created_by: &str, participants: &[&str]) -> Expense {
    let now = chrono::Utc::now();
    Expense {
        id: id.to_string(),
        title: format!("Expense {}", id),
        amount,
        split_method: SplitMethod::Equal,
        split_details: Vec::new(),
        created_by: created_by.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
        created_at: now,
        updated_at: now,
    }
}

use crate::core::errors::SplitsheetError;
use crate::core::models::{expense::Expense, user::User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, SplitsheetError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitsheetError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SplitsheetError>;
    async fn save_expense(&self, expense: Expense) -> Result<Expense, SplitsheetError>;
    async fn get_expenses_by_participant(&self, user_id: &str) -> Result<Vec<Expense>, SplitsheetError>;
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, SplitsheetError>;
}

pub mod in_memory;

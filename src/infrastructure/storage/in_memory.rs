use crate::core::errors::SplitsheetError;
use crate::core::models::{expense::Expense, user::User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    users_by_email: Arc<RwLock<HashMap<String, String>>>, // email -> user_id
    expenses: Arc<RwLock<Vec<Expense>>>,                  // creation order
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
            expenses: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, user: User) -> Result<User, SplitsheetError> {
        let mut users_by_email = self.users_by_email.write().await;
        if users_by_email.contains_key(&user.email) {
            return Err(SplitsheetError::EmailAlreadyRegistered(user.email));
        }
        users_by_email.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitsheetError> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SplitsheetError> {
        let user_id = self.users_by_email.read().await.get(email).cloned();
        Ok(match user_id {
            Some(id) => self.users.read().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_expense(&self, expense: Expense) -> Result<Expense, SplitsheetError> {
        self.expenses.write().await.push(expense.clone());
        Ok(expense)
    }

    async fn get_expenses_by_participant(&self, user_id: &str) -> Result<Vec<Expense>, SplitsheetError> {
        Ok(self
            .expenses
            .read()
            .await
            .iter()
            .filter(|e| e.has_participant(user_id))
            .cloned()
            .collect())
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, SplitsheetError> {
        Ok(self.expenses.read().await.clone())
    }
}

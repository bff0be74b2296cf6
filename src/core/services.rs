use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{
    BALANCE_SHEET_COLUMNS, BALANCE_SHEET_EXPORTED, BALANCE_SHEET_FILE_PREFIX, EXPENSE_ADDED, MAX_EXPENSE_AMOUNT,
    MAX_NAME_LENGTH, MAX_TITLE_LENGTH, USER_LOGGED_IN, USER_REGISTERED,
};
use crate::core::balances::compute_balances;
use crate::core::errors::SplitsheetError;
use crate::core::models::{
    audit::AppLog,
    balance::BalanceEntry,
    expense::{Expense, ExpenseWithCreator, NewExpense, SplitMethod},
    user::User,
};
use crate::infrastructure::export::{ExportFile, ExportWriter};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::str::FromStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct SplitsheetService<L: LoggingService, S: Storage, E: ExportWriter> {
    storage: S,
    logging: L,
    exporter: E,
    jwt_service: JwtService,
    hash_cost: u32,
}

impl<L: LoggingService, S: Storage, E: ExportWriter> SplitsheetService<L, S, E> {
    pub fn new(storage: S, logging: L, exporter: E, jwt_secret: String) -> Self {
        SplitsheetService {
            storage,
            logging,
            exporter,
            jwt_service: JwtService::new(jwt_secret),
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Sets the bcrypt cost used when hashing new passwords.
    pub fn with_hash_cost(mut self, hash_cost: u32) -> Self {
        self.hash_cost = hash_cost;
        self
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, SplitsheetError> {
        self.jwt_service.validate_token(token)
    }

    async fn validate_users(&self, user_ids: &[String]) -> Result<(), SplitsheetError> {
        let lookups = user_ids.iter().map(|id| async move {
            self.storage
                .get_user(id)
                .await?
                .ok_or_else(|| SplitsheetError::UserNotFound(id.clone()))
        });
        futures::future::try_join_all(lookups).await?;
        Ok(())
    }

    /// Appends to the audit trail after the operation has committed. A failed
    /// write is reported through `tracing` and leaves the operation in place.
    async fn audit(&self, action: &str, details: serde_json::Value, user_id: Option<&str>) {
        if let Err(e) = self.logging.log_action(action, details, user_id).await {
            warn!("Failed to record {} audit entry: {}", action, e);
        }
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), SplitsheetError> {
        if value.trim().is_empty() {
            return Err(SplitsheetError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(SplitsheetError::invalid_input(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(SplitsheetError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), SplitsheetError> {
        if !amount.is_finite() {
            return Err(SplitsheetError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be a finite number",
            ));
        }
        if amount <= 0.0 {
            return Err(SplitsheetError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be greater than 0",
            ));
        }
        if amount > MAX_EXPENSE_AMOUNT {
            return Err(SplitsheetError::invalid_input(
                field,
                "Amount Too Large",
                "Amount cannot exceed 1,000,000",
            ));
        }
        Ok(())
    }

    // USERS

    pub async fn register_user(&self, name: String, email: String, password: String) -> Result<User, SplitsheetError> {
        if email.is_empty() {
            return Err(SplitsheetError::MissingEmail);
        }
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(SplitsheetError::InvalidEmail(email));
        }
        if password.is_empty() {
            return Err(SplitsheetError::invalid_input(
                "password",
                "Invalid password",
                "Password cannot be empty",
            ));
        }
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;

        let password_hash = bcrypt::hash(&password, self.hash_cost)
            .map_err(|e| SplitsheetError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let user = self
            .storage
            .create_user(User {
                id: Uuid::new_v4().to_string(),
                name,
                email,
                password_hash,
            })
            .await?;
        info!("Registered user {}", user.id);

        self.audit(
            USER_REGISTERED,
            json!({ "user_id": user.id, "name": user.name, "email": user.email }),
            Some(user.id.as_str()),
        )
        .await;

        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, SplitsheetError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(SplitsheetError::InvalidCredentials)?;

        let verified = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| SplitsheetError::InternalServerError(format!("Password verification error: {}", e)))?;
        if !verified {
            warn!("Failed login attempt for user {}", user.id);
            return Err(SplitsheetError::InvalidCredentials);
        }

        let token = self.jwt_service.generate_token(&user.id)?;
        self.audit(USER_LOGGED_IN, json!({ "user_id": user.id }), Some(user.id.as_str())).await;
        Ok(token)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitsheetError> {
        self.storage.get_user(user_id).await
    }

    // EXPENSES

    pub async fn add_expense(&self, created_by: &User, new_expense: NewExpense) -> Result<Expense, SplitsheetError> {
        self.validate_string_input("title", &new_expense.title, MAX_TITLE_LENGTH)?;
        self.validate_amount_input("amount", new_expense.amount)?;

        let split_method = match SplitMethod::from_str(&new_expense.split_method) {
            Ok(method) if method.validate(new_expense.amount, &new_expense.split_details) => method,
            _ => {
                warn!(
                    "Rejected {} split for expense '{}' by user {}",
                    new_expense.split_method, new_expense.title, created_by.id
                );
                return Err(SplitsheetError::InvalidSplit);
            }
        };

        let mut seen = HashSet::new();
        let participants: Vec<String> = new_expense
            .participants
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        if participants.is_empty() {
            return Err(SplitsheetError::EmptyParticipants);
        }
        self.validate_users(&participants).await?;

        let now = Utc::now();
        let expense = self
            .storage
            .save_expense(Expense {
                id: Uuid::new_v4().to_string(),
                title: new_expense.title,
                amount: new_expense.amount,
                split_method,
                split_details: new_expense.split_details,
                created_by: created_by.id.clone(),
                participants,
                created_at: now,
                updated_at: now,
            })
            .await?;
        debug!("Expense {} saved with {} participants", expense.id, expense.participants.len());

        self.audit(
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "title": expense.title,
                "amount": expense.amount,
                "split_method": expense.split_method.to_string(),
                "participant_ids": expense.participants,
            }),
            Some(created_by.id.as_str()),
        )
        .await;

        Ok(expense)
    }

    pub async fn get_user_expenses(&self, user_id: &str) -> Result<Vec<Expense>, SplitsheetError> {
        self.storage.get_expenses_by_participant(user_id).await
    }

    pub async fn get_all_expenses(&self) -> Result<Vec<ExpenseWithCreator>, SplitsheetError> {
        let expenses = self.storage.get_all_expenses().await?;

        let mut names: HashMap<String, Option<String>> = HashMap::new();
        for expense in &expenses {
            if !names.contains_key(&expense.created_by) {
                let name = self.storage.get_user(&expense.created_by).await?.map(|u| u.name);
                names.insert(expense.created_by.clone(), name);
            }
        }

        Ok(expenses
            .into_iter()
            .map(|expense| {
                let name = names.get(&expense.created_by).cloned().flatten();
                ExpenseWithCreator::new(expense, name)
            })
            .collect())
    }

    // BALANCES

    pub async fn get_balances(&self) -> Result<BTreeMap<String, BalanceEntry>, SplitsheetError> {
        let expenses = self.storage.get_all_expenses().await?;
        Ok(compute_balances(&expenses))
    }

    /// Renders the balance sheet over every stored expense. Each call gets its
    /// own file name and the content never leaves memory.
    pub async fn generate_balance_sheet(&self, requested_by: &str) -> Result<ExportFile, SplitsheetError> {
        let balances = self
            .get_balances()
            .await
            .map_err(|e| SplitsheetError::BalanceSheetGeneration(e.to_string()))?;

        let rows: Vec<serde_json::Value> = balances
            .iter()
            .map(|(user_id, entry)| {
                json!({
                    "userId": user_id,
                    "totalPaid": entry.total_paid,
                    "totalOwed": entry.total_owed,
                    "netBalance": entry.net_balance,
                })
            })
            .collect();

        let file_name = format!("{}-{}.csv", BALANCE_SHEET_FILE_PREFIX, Uuid::new_v4());
        let file = self.exporter.write_table(&file_name, &rows, &BALANCE_SHEET_COLUMNS)?;
        info!("Generated balance sheet {} with {} rows", file.file_name, rows.len());

        self.audit(
            BALANCE_SHEET_EXPORTED,
            json!({ "file_name": file.file_name, "rows": rows.len() }),
            Some(requested_by),
        )
        .await;

        Ok(file)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitsheetError> {
        self.logging.get_logs().await
    }
}

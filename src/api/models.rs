use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::SplitsheetError;
use crate::core::models::expense::{NewExpense, SplitDetail};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenseRequest {
    pub title: String,
    pub amount: f64,
    /// One of `equal`, `exact` or `percentage`.
    pub split_method: String,
    #[serde(default)]
    pub split_details: Vec<SplitDetail>,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl From<AddExpenseRequest> for NewExpense {
    fn from(req: AddExpenseRequest) -> Self {
        NewExpense {
            title: req.title,
            amount: req.amount,
            split_method: req.split_method,
            split_details: req.split_details,
            participants: req.participants,
        }
    }
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitsheetError to implement IntoResponse
pub struct ApiError(pub SplitsheetError);

impl From<SplitsheetError> for ApiError {
    fn from(err: SplitsheetError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match &self.0 {
            SplitsheetError::MissingEmail => (StatusCode::BAD_REQUEST, "Email is required".to_string()),
            SplitsheetError::EmailAlreadyRegistered(email) => {
                (StatusCode::CONFLICT, format!("Email {} already registered", email))
            }
            SplitsheetError::InvalidEmail(email) => (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email)),
            SplitsheetError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string()),
            SplitsheetError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            SplitsheetError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id)),
            SplitsheetError::InvalidSplit => (StatusCode::BAD_REQUEST, "Invalid split details".to_string()),
            SplitsheetError::EmptyParticipants => (
                StatusCode::BAD_REQUEST,
                "Expense must have at least one participant".to_string(),
            ),
            SplitsheetError::InvalidInput(_, field_error) => {
                (StatusCode::BAD_REQUEST, format!("{}: {}", field_error.title, field_error.description))
            }
            SplitsheetError::BalanceSheetGeneration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate balance sheet".to_string(),
            ),
            SplitsheetError::BalanceSheetDelivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to download balance sheet".to_string(),
            ),
            SplitsheetError::InternalServerError(_)
            | SplitsheetError::StorageError(_)
            | SplitsheetError::LoggingError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

use crate::{
    api::models::*,
    core::{
        errors::SplitsheetError,
        models::{
            audit::AppLog,
            expense::{Expense, ExpenseWithCreator},
            user::User,
        },
        services::SplitsheetService,
    },
    infrastructure::{
        export::csv::CsvExportWriter, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
    auth::jwt::Claims,
};
use axum::{
    Extension, Json, Router,
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::header;
use std::sync::Arc;
use tracing::info;

pub type AppService = SplitsheetService<InMemoryLogging, InMemoryStorage, CsvExportWriter>;

// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| SplitsheetError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| SplitsheetError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let protected_routes = Router::new()
        .route("/users/me", get(get_current_user))
        .route("/expenses", post(add_expense).get(get_all_expenses))
        .route("/expenses/user", get(get_user_expenses))
        .route("/expenses/balance-sheet", get(download_balance_sheet))
        .route("/logs", get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/users/register", post(register_user))
        .route("/users/login", post(login))
        .merge(protected_routes)
        .with_state(service)
}

async fn current_user(service: &AppService, claims: &Claims) -> Result<User, SplitsheetError> {
    service
        .get_user(&claims.sub)
        .await?
        .ok_or_else(|| SplitsheetError::UserNotFound(claims.sub.clone()))
}

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn register_user(
    State(service): State<Arc<AppService>>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service.register_user(req.name, req.email, req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = service.authenticate(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Authenticated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_current_user(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<User>, ApiError> {
    let user = current_user(&service, &claims).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = AddExpenseRequest,
    responses(
        (status = 201, description = "Expense recorded", body = Expense),
        (status = 400, description = "Invalid split details or input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Participant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn add_expense(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let created_by = current_user(&service, &claims).await?;
    let expense = service.add_expense(&created_by, req.into()).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/expenses/user",
    responses(
        (status = 200, description = "Expenses the caller participates in", body = Vec<Expense>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_user_expenses(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = service.get_user_expenses(&claims.sub).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    responses(
        (status = 200, description = "All expenses with creator names", body = Vec<ExpenseWithCreator>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_all_expenses(
    State(service): State<Arc<AppService>>,
) -> Result<Json<Vec<ExpenseWithCreator>>, ApiError> {
    let expenses = service.get_all_expenses().await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    get,
    path = "/api/expenses/balance-sheet",
    responses(
        (status = 200, description = "Balance sheet as a CSV attachment", body = String, content_type = "text/csv"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Balance sheet could not be generated or delivered", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn download_balance_sheet(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let file = service.generate_balance_sheet(&claims.sub).await?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.file_name))
        .map_err(|e| SplitsheetError::BalanceSheetDelivery(format!("invalid file name header: {}", e)))?;
    info!("Sending balance sheet {} to user {}", file.file_name, claims.sub);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(file.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application audit log", body = Vec<AppLog>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

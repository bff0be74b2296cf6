use utoipa::OpenApi;

use crate::{
    api::models::{AddExpenseRequest, ErrorResponse, LoginRequest, LoginResponse, RegisterUserRequest},
    core::models::{
        audit::AppLog,
        balance::BalanceEntry,
        expense::{CreatorSummary, Expense, ExpenseWithCreator, SplitDetail, SplitMethod},
        user::User,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register_user,
        super::handlers::login,
        super::handlers::get_current_user,
        super::handlers::add_expense,
        super::handlers::get_user_expenses,
        super::handlers::get_all_expenses,
        super::handlers::download_balance_sheet,
        super::handlers::get_app_logs
    ),
    components(schemas(
        RegisterUserRequest,
        LoginRequest,
        LoginResponse,
        AddExpenseRequest,
        ErrorResponse,
        User,
        Expense,
        ExpenseWithCreator,
        CreatorSummary,
        SplitDetail,
        SplitMethod,
        BalanceEntry,
        AppLog
    )),
    info(
        title = "Splitsheet API",
        description = "API for recording shared expenses and exporting balance sheets",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub mod in_memory;

use crate::core::errors::SplitsheetError;
use crate::core::models::audit::AppLog;
use async_trait::async_trait;

/// Application audit trail. Diagnostic logging goes through `tracing`.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), SplitsheetError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, SplitsheetError>;
}

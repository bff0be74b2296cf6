use crate::core::errors::SplitsheetError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Audit trail kept in process memory, oldest entry first.
#[derive(Clone, Default)]
pub struct InMemoryLogging {
    entries: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Flattens audit details into the stored map. Objects keep their keys, `null`
/// becomes an empty map and any other value is stored under `"value"`.
fn audit_details(details: Value) -> HashMap<String, Value> {
    match details {
        Value::Object(fields) => fields.into_iter().collect(),
        Value::Null => HashMap::new(),
        other => HashMap::from([("value".to_string(), other)]),
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(&self, action: &str, details: Value, user_id: Option<&str>) -> Result<(), SplitsheetError> {
        let entry = AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            user_id: user_id.map(str::to_string),
            details: audit_details(details),
            timestamp: Utc::now(),
        };
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, SplitsheetError> {
        Ok(self.entries.read().await.clone())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl DatabaseHealthStatus {
    pub fn up(response_time_ms: u64) -> Self {
        Self {
            status: "UP".to_string(),
            response_time_ms,
            checked_at: Utc::now(),
        }
    }
}

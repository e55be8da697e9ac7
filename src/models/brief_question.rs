use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question asked when a user starts a new content brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefQuestion {
    pub id: Uuid,
    pub question: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/admin/brief-question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBriefQuestion {
    pub question: String,
}

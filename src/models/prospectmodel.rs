use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "prospect_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProspectStatus {
    New,
    Contacted,
    Qualified,
    Client,
    Lost,
}

impl ProspectStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ProspectStatus::New => "new",
            ProspectStatus::Contacted => "contacted",
            ProspectStatus::Qualified => "qualified",
            ProspectStatus::Client => "client",
            ProspectStatus::Lost => "lost",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Prospect {
    pub id: Uuid,
    // Detached (set to NULL) if the referring affiliate is ever removed
    pub affiliate_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: Option<String>,
    pub status: ProspectStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shareable link of an affiliate. The code is issued once at signup
/// and never changes; clicks only ever count up.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ReferralLink {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub code: String,
    pub clicks: i32,
    pub created_at: DateTime<Utc>,
}

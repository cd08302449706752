use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Monetary amounts are integer cents (see utils::currency).

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Invoice {
    pub id: Uuid,
    pub prospect_id: Uuid,
    pub amount_cents: i64,
    pub invoice_number: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The affiliate's 20% share of an invoice. Created in the same
/// transaction as its invoice; `paid` only ever flips to true.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Commission {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub invoice_id: Uuid,
    pub amount_cents: i64,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "affiliate_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AffiliateStatus {
    Pending,
    Approved,
    Suspended,
}

impl AffiliateStatus {
    pub fn to_str(&self) -> &str {
        match self {
            AffiliateStatus::Pending => "pending",
            AffiliateStatus::Approved => "approved",
            AffiliateStatus::Suspended => "suspended",
        }
    }
}

/// Payout coordinates an affiliate hands over once approved. Stored as a
/// JSONB blob on the affiliate row; the backend never uses it to move money.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BankInfo {
    pub account_holder: String,
    pub iban: String,
    pub bic: String,
    pub bank_name: String,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Affiliate {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub bank_info: Option<sqlx::types::Json<BankInfo>>,
    pub status: AffiliateStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

// db/prospectdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;

use crate::models::prospectmodel::{Prospect, ProspectStatus};

/// Admin listing row: the prospect joined with its attributed affiliate.
#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct ProspectWithAffiliate {
    pub id: Uuid,
    pub affiliate_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: Option<String>,
    pub status: ProspectStatus,
    pub affiliate_name: Option<String>,
    pub affiliate_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ProspectExt {
    async fn save_prospect(
        &self,
        affiliate_id: Uuid,
        name: String,
        email: String,
        company: String,
        message: Option<String>,
    ) -> Result<Prospect, sqlx::Error>;

    async fn get_prospect(&self, prospect_id: Uuid) -> Result<Option<Prospect>, sqlx::Error>;

    async fn get_prospects_with_affiliate(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ProspectWithAffiliate>, sqlx::Error>;

    async fn get_prospects_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Vec<Prospect>, sqlx::Error>;

    async fn update_prospect_status(
        &self,
        prospect_id: Uuid,
        status: ProspectStatus,
    ) -> Result<Option<Prospect>, sqlx::Error>;
}

#[async_trait]
impl ProspectExt for DBClient {
    async fn save_prospect(
        &self,
        affiliate_id: Uuid,
        name: String,
        email: String,
        company: String,
        message: Option<String>,
    ) -> Result<Prospect, sqlx::Error> {
        sqlx::query_as::<_, Prospect>(
            r#"
            INSERT INTO prospects (affiliate_id, name, email, company, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, affiliate_id, name, email, company, message, status, created_at, updated_at
            "#,
        )
        .bind(affiliate_id)
        .bind(name)
        .bind(email)
        .bind(company)
        .bind(message)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_prospect(&self, prospect_id: Uuid) -> Result<Option<Prospect>, sqlx::Error> {
        sqlx::query_as::<_, Prospect>(
            r#"
            SELECT id, affiliate_id, name, email, company, message, status, created_at, updated_at
            FROM prospects
            WHERE id = $1
            "#,
        )
        .bind(prospect_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_prospects_with_affiliate(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ProspectWithAffiliate>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, ProspectWithAffiliate>(
            r#"
            SELECT
                p.id,
                p.affiliate_id,
                p.name,
                p.email,
                p.company,
                p.message,
                p.status,
                a.name AS affiliate_name,
                a.email AS affiliate_email,
                p.created_at
            FROM prospects p
            LEFT JOIN affiliates a ON a.id = p.affiliate_id
            ORDER BY p.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_prospects_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Vec<Prospect>, sqlx::Error> {
        sqlx::query_as::<_, Prospect>(
            r#"
            SELECT id, affiliate_id, name, email, company, message, status, created_at, updated_at
            FROM prospects
            WHERE affiliate_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_prospect_status(
        &self,
        prospect_id: Uuid,
        status: ProspectStatus,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        sqlx::query_as::<_, Prospect>(
            r#"
            UPDATE prospects
            SET status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, affiliate_id, name, email, company, message, status, created_at, updated_at
            "#,
        )
        .bind(prospect_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }
}

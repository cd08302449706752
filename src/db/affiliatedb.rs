// db/affiliatedb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;

use crate::models::{
    affiliatemodel::{Affiliate, AffiliateStatus, BankInfo},
    referralmodel::ReferralLink,
};

/// One admin-dashboard row: the affiliate with its link and earnings.
#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct AffiliateOverview {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: AffiliateStatus,
    pub code: Option<String>,
    pub clicks: Option<i32>,
    pub prospect_count: i64,
    pub total_commission_cents: i64,
    pub unpaid_commission_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait AffiliateExt {
    /// Signup: the affiliate row and its referral link are created in one
    /// transaction so no affiliate ever exists without a shareable code.
    async fn save_affiliate(
        &self,
        name: String,
        email: String,
        password: String,
        referral_code: String,
    ) -> Result<(Affiliate, ReferralLink), sqlx::Error>;

    async fn get_affiliate(
        &self,
        affiliate_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<Affiliate>, sqlx::Error>;

    async fn update_affiliate_status(
        &self,
        affiliate_id: Uuid,
        status: AffiliateStatus,
    ) -> Result<Option<Affiliate>, sqlx::Error>;

    async fn update_bank_info(
        &self,
        affiliate_id: Uuid,
        bank_info: BankInfo,
    ) -> Result<Option<Affiliate>, sqlx::Error>;

    async fn get_affiliate_overviews(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<AffiliateOverview>, sqlx::Error>;
}

#[async_trait]
impl AffiliateExt for DBClient {
    async fn save_affiliate(
        &self,
        name: String,
        email: String,
        password: String,
        referral_code: String,
    ) -> Result<(Affiliate, ReferralLink), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let affiliate = sqlx::query_as::<_, Affiliate>(
            r#"
            INSERT INTO affiliates (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, password, bank_info, status, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .fetch_one(&mut *tx)
        .await?;

        let link = sqlx::query_as::<_, ReferralLink>(
            r#"
            INSERT INTO referral_links (affiliate_id, code)
            VALUES ($1, $2)
            RETURNING id, affiliate_id, code, clicks, created_at
            "#,
        )
        .bind(affiliate.id)
        .bind(referral_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((affiliate, link))
    }

    async fn get_affiliate(
        &self,
        affiliate_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<Affiliate>, sqlx::Error> {
        let mut affiliate: Option<Affiliate> = None;

        if let Some(affiliate_id) = affiliate_id {
            affiliate = sqlx::query_as::<_, Affiliate>(
                r#"
                SELECT id, email, name, password, bank_info, status, created_at, updated_at
                FROM affiliates
                WHERE id = $1
                "#,
            )
            .bind(affiliate_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            affiliate = sqlx::query_as::<_, Affiliate>(
                r#"
                SELECT id, email, name, password, bank_info, status, created_at, updated_at
                FROM affiliates
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(affiliate)
    }

    async fn update_affiliate_status(
        &self,
        affiliate_id: Uuid,
        status: AffiliateStatus,
    ) -> Result<Option<Affiliate>, sqlx::Error> {
        sqlx::query_as::<_, Affiliate>(
            r#"
            UPDATE affiliates
            SET status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, password, bank_info, status, created_at, updated_at
            "#,
        )
        .bind(affiliate_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_bank_info(
        &self,
        affiliate_id: Uuid,
        bank_info: BankInfo,
    ) -> Result<Option<Affiliate>, sqlx::Error> {
        sqlx::query_as::<_, Affiliate>(
            r#"
            UPDATE affiliates
            SET bank_info = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, password, bank_info, status, created_at, updated_at
            "#,
        )
        .bind(affiliate_id)
        .bind(sqlx::types::Json(bank_info))
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_affiliate_overviews(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<AffiliateOverview>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, AffiliateOverview>(
            r#"
            SELECT
                a.id,
                a.name,
                a.email,
                a.status,
                l.code,
                l.clicks,
                (SELECT COUNT(*) FROM prospects p WHERE p.affiliate_id = a.id) AS prospect_count,
                (SELECT COALESCE(SUM(c.amount_cents), 0)
                   FROM commissions c WHERE c.affiliate_id = a.id)::BIGINT AS total_commission_cents,
                (SELECT COALESCE(SUM(c.amount_cents), 0)
                   FROM commissions c WHERE c.affiliate_id = a.id AND NOT c.paid)::BIGINT AS unpaid_commission_cents,
                a.created_at
            FROM affiliates a
            LEFT JOIN referral_links l ON l.affiliate_id = a.id
            ORDER BY a.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }
}

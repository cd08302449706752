// db/referraldb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::referralmodel::ReferralLink;

#[async_trait]
pub trait ReferralExt {
    async fn get_link_by_code(&self, code: &str) -> Result<Option<ReferralLink>, sqlx::Error>;

    async fn get_link_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Option<ReferralLink>, sqlx::Error>;

    /// Single-statement increment so concurrent clicks on the same code
    /// never lose updates. Returns the number of rows touched: 0 means
    /// the code does not exist.
    async fn increment_clicks(&self, code: &str) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl ReferralExt for DBClient {
    async fn get_link_by_code(&self, code: &str) -> Result<Option<ReferralLink>, sqlx::Error> {
        sqlx::query_as::<_, ReferralLink>(
            r#"
            SELECT id, affiliate_id, code, clicks, created_at
            FROM referral_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_link_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Option<ReferralLink>, sqlx::Error> {
        sqlx::query_as::<_, ReferralLink>(
            r#"
            SELECT id, affiliate_id, code, clicks, created_at
            FROM referral_links
            WHERE affiliate_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(affiliate_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn increment_clicks(&self, code: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE referral_links
            SET clicks = clicks + 1
            WHERE code = $1
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

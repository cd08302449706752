// db/invoicedb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;

use crate::models::invoicemodel::{Commission, Invoice};

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct InvoiceWithProspect {
    pub id: Uuid,
    pub prospect_id: Uuid,
    pub amount_cents: i64,
    pub invoice_number: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub prospect_name: String,
    pub prospect_company: String,
    pub created_at: DateTime<Utc>,
}

/// Affiliate dashboard row: the commission with the invoice it derives
/// from and the client it was earned on.
#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CommissionWithInvoice {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount_cents: i64,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub invoice_amount_cents: i64,
    pub prospect_name: String,
    pub prospect_company: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct CommissionTotals {
    pub total_cents: i64,
    pub unpaid_cents: i64,
}

#[async_trait]
pub trait InvoiceExt {
    /// The three-effect issuance transaction: insert the invoice, insert
    /// its commission for the prospect's affiliate, move the prospect to
    /// `client`. All or nothing. The prospect row is locked for the
    /// duration, so concurrent issuance against it serializes; the
    /// affiliate is re-derived under that lock. Fails with
    /// `sqlx::Error::RowNotFound` when the prospect is gone or has no
    /// affiliate by the time the lock is taken.
    async fn create_invoice_with_commission(
        &self,
        prospect_id: Uuid,
        amount_cents: i64,
        commission_cents: i64,
        invoice_number: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Result<(Invoice, Commission), sqlx::Error>;

    async fn get_invoices_with_prospect(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<InvoiceWithProspect>, sqlx::Error>;

    async fn get_commissions_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Vec<CommissionWithInvoice>, sqlx::Error>;

    async fn get_commission_totals(
        &self,
        affiliate_id: Uuid,
    ) -> Result<CommissionTotals, sqlx::Error>;

    async fn mark_commission_paid(
        &self,
        commission_id: Uuid,
    ) -> Result<Option<Commission>, sqlx::Error>;
}

#[async_trait]
impl InvoiceExt for DBClient {
    async fn create_invoice_with_commission(
        &self,
        prospect_id: Uuid,
        amount_cents: i64,
        commission_cents: i64,
        invoice_number: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Result<(Invoice, Commission), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let affiliate_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT affiliate_id
            FROM prospects
            WHERE id = $1 AND affiliate_id IS NOT NULL
            FOR UPDATE
            "#,
        )
        .bind(prospect_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (prospect_id, amount_cents, invoice_number, file_url, file_name, paid_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, prospect_id, amount_cents, invoice_number, file_url, file_name, paid_at, created_at
            "#,
        )
        .bind(prospect_id)
        .bind(amount_cents)
        .bind(invoice_number)
        .bind(file_url)
        .bind(file_name)
        .fetch_one(&mut *tx)
        .await?;

        let commission = sqlx::query_as::<_, Commission>(
            r#"
            INSERT INTO commissions (affiliate_id, invoice_id, amount_cents)
            VALUES ($1, $2, $3)
            RETURNING id, affiliate_id, invoice_id, amount_cents, paid, paid_at, created_at
            "#,
        )
        .bind(affiliate_id)
        .bind(invoice.id)
        .bind(commission_cents)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE prospects
            SET status = 'client'::prospect_status,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(prospect_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((invoice, commission))
    }

    async fn get_invoices_with_prospect(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<InvoiceWithProspect>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, InvoiceWithProspect>(
            r#"
            SELECT
                i.id,
                i.prospect_id,
                i.amount_cents,
                i.invoice_number,
                i.file_url,
                i.file_name,
                i.paid_at,
                p.name AS prospect_name,
                p.company AS prospect_company,
                i.created_at
            FROM invoices i
            JOIN prospects p ON p.id = i.prospect_id
            ORDER BY i.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_commissions_by_affiliate(
        &self,
        affiliate_id: Uuid,
    ) -> Result<Vec<CommissionWithInvoice>, sqlx::Error> {
        sqlx::query_as::<_, CommissionWithInvoice>(
            r#"
            SELECT
                c.id,
                c.invoice_id,
                c.amount_cents,
                c.paid,
                c.paid_at,
                i.amount_cents AS invoice_amount_cents,
                p.name AS prospect_name,
                p.company AS prospect_company,
                c.created_at
            FROM commissions c
            JOIN invoices i ON i.id = c.invoice_id
            JOIN prospects p ON p.id = i.prospect_id
            WHERE c.affiliate_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_commission_totals(
        &self,
        affiliate_id: Uuid,
    ) -> Result<CommissionTotals, sqlx::Error> {
        sqlx::query_as::<_, CommissionTotals>(
            r#"
            SELECT
                COALESCE(SUM(amount_cents), 0)::BIGINT AS total_cents,
                COALESCE(SUM(amount_cents) FILTER (WHERE NOT paid), 0)::BIGINT AS unpaid_cents
            FROM commissions
            WHERE affiliate_id = $1
            "#,
        )
        .bind(affiliate_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn mark_commission_paid(
        &self,
        commission_id: Uuid,
    ) -> Result<Option<Commission>, sqlx::Error> {
        // Idempotent: re-marking keeps the first paid_at stamp.
        sqlx::query_as::<_, Commission>(
            r#"
            UPDATE commissions
            SET paid = TRUE,
                paid_at = COALESCE(paid_at, NOW())
            WHERE id = $1
            RETURNING id, affiliate_id, invoice_id, amount_cents, paid, paid_at, created_at
            "#,
        )
        .bind(commission_id)
        .fetch_optional(&self.pool)
        .await
    }
}

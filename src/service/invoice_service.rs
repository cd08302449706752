use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, invoicedb::InvoiceExt, prospectdb::ProspectExt},
    models::invoicemodel::{Commission, Invoice},
    service::error::ServiceError,
    utils::currency::{commission_on, parse_amount_to_cents},
};

/// Issues invoices against converted prospects. Every successful issuance
/// is one transaction with three effects: the invoice row, a commission
/// row at 20% of the invoice amount, and the prospect moving to `client`.
#[derive(Debug, Clone)]
pub struct InvoiceService {
    db_client: Arc<DBClient>,
}

impl InvoiceService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        InvoiceService { db_client }
    }

    pub async fn issue_invoice(
        &self,
        prospect_id: Uuid,
        amount: &str,
        invoice_number: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Result<(Invoice, Commission), ServiceError> {
        let amount_cents =
            parse_amount_to_cents(amount).map_err(ServiceError::InvalidAmount)?;
        let commission_cents = commission_on(amount_cents);

        let prospect = self
            .db_client
            .get_prospect(prospect_id)
            .await?
            .ok_or(ServiceError::ProspectNotFound(prospect_id))?;

        if prospect.affiliate_id.is_none() {
            return Err(ServiceError::NoAffiliateAttributed(prospect_id));
        }

        let (invoice, commission) = self
            .db_client
            .create_invoice_with_commission(
                prospect_id,
                amount_cents,
                commission_cents,
                invoice_number,
                file_url,
                file_name,
            )
            .await
            .map_err(|e| match e {
                // The prospect vanished or lost its affiliate between the
                // check above and the row lock inside the transaction.
                sqlx::Error::RowNotFound => ServiceError::NoAffiliateAttributed(prospect_id),
                other => ServiceError::Database(other),
            })?;

        tracing::info!(
            "Invoice {} issued on prospect {}: commission {} for affiliate {}",
            invoice.id,
            prospect_id,
            commission.amount_cents,
            commission.affiliate_id
        );

        Ok((invoice, commission))
    }

    /// One-way: flips `paid` to true and stamps `paid_at`. Calling it on an
    /// already-paid commission succeeds and keeps the original timestamp.
    pub async fn mark_commission_paid(
        &self,
        commission_id: Uuid,
    ) -> Result<Commission, ServiceError> {
        self.db_client
            .mark_commission_paid(commission_id)
            .await?
            .ok_or(ServiceError::CommissionNotFound(commission_id))
    }
}

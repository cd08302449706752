use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::invoicedb::{CommissionWithInvoice, InvoiceWithProspect},
    models::invoicemodel::{Commission, Invoice},
    utils::currency::format_cents_as_euros,
};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceDto {
    pub prospect_id: Uuid,

    /// Decimal amount as a string ("1000.00"), parsed exactly, never via float.
    #[validate(length(min = 1, message = "Amount is required"))]
    pub amount: String,

    #[validate(length(max = 100, message = "Invoice number must not exceed 100 characters"))]
    pub invoice_number: Option<String>,

    #[validate(url(message = "File URL is invalid"))]
    pub file_url: Option<String>,

    #[validate(length(max = 255, message = "File name must not exceed 255 characters"))]
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterInvoiceDto {
    pub id: String,
    pub prospect_id: String,
    pub amount_cents: i64,
    pub amount: String,
    pub invoice_number: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl FilterInvoiceDto {
    pub fn filter_invoice(invoice: &Invoice) -> Self {
        FilterInvoiceDto {
            id: invoice.id.to_string(),
            prospect_id: invoice.prospect_id.to_string(),
            amount_cents: invoice.amount_cents,
            amount: format_cents_as_euros(invoice.amount_cents),
            invoice_number: invoice.invoice_number.to_owned(),
            file_url: invoice.file_url.to_owned(),
            file_name: invoice.file_name.to_owned(),
            paid_at: invoice.paid_at,
            created_at: invoice.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterCommissionDto {
    pub id: String,
    pub affiliate_id: String,
    pub invoice_id: String,
    pub amount_cents: i64,
    pub amount: String,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl FilterCommissionDto {
    pub fn filter_commission(commission: &Commission) -> Self {
        FilterCommissionDto {
            id: commission.id.to_string(),
            affiliate_id: commission.affiliate_id.to_string(),
            invoice_id: commission.invoice_id.to_string(),
            amount_cents: commission.amount_cents,
            amount: format_cents_as_euros(commission.amount_cents),
            paid: commission.paid,
            paid_at: commission.paid_at,
            created_at: commission.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueInvoiceData {
    pub invoice: FilterInvoiceDto,
    pub commission: FilterCommissionDto,
}

#[derive(Debug, Serialize)]
pub struct IssueInvoiceResponseDto {
    pub status: String,
    pub data: IssueInvoiceData,
}

#[derive(Debug, Serialize)]
pub struct CommissionResponseDto {
    pub status: String,
    pub commission: FilterCommissionDto,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponseDto {
    pub status: String,
    pub results: usize,
    pub invoices: Vec<InvoiceWithProspect>,
}

#[derive(Debug, Serialize)]
pub struct CommissionListResponseDto {
    pub status: String,
    pub results: usize,
    pub commissions: Vec<CommissionWithInvoice>,
    pub total_earned: String,
    pub total_pending: String,
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::invoicedb::InvoiceExt,
    dtos::{
        invoicedtos::{
            CommissionResponseDto, CreateInvoiceDto, FilterCommissionDto, FilterInvoiceDto,
            InvoiceListResponseDto, IssueInvoiceData, IssueInvoiceResponseDto,
        },
        RequestQueryDto,
    },
    error::HttpError,
    AppState,
};

pub async fn issue_invoice(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let (invoice, commission) = app_state
        .invoice_service
        .issue_invoice(
            body.prospect_id,
            &body.amount,
            body.invoice_number,
            body.file_url,
            body.file_name,
        )
        .await?;

    Ok(Json(IssueInvoiceResponseDto {
        status: "success".to_string(),
        data: IssueInvoiceData {
            invoice: FilterInvoiceDto::filter_invoice(&invoice),
            commission: FilterCommissionDto::filter_commission(&commission),
        },
    }))
}

pub async fn list_invoices(
    Query(query_params): Query<RequestQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let invoices = app_state
        .db_client
        .get_invoices_with_prospect(page as u32, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(InvoiceListResponseDto {
        status: "success".to_string(),
        results: invoices.len(),
        invoices,
    }))
}

pub async fn mark_commission_paid(
    Path(commission_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let commission = app_state
        .invoice_service
        .mark_commission_paid(commission_id)
        .await?;

    Ok(Json(CommissionResponseDto {
        status: "success".to_string(),
        commission: FilterCommissionDto::filter_commission(&commission),
    }))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{affiliatedb::AffiliateExt, invoicedb::InvoiceExt, prospectdb::ProspectExt, referraldb::ReferralExt},
    dtos::{
        affiliatedtos::{
            AffiliateAccountData, AffiliateOverviewDto, AffiliateOverviewResponseDto,
            AffiliateResponseDto, FilterAffiliateDto, ReferralLinkDto, UpdateAffiliateStatusDto,
            UpdateBankInfoDto,
        },
        invoicedtos::CommissionListResponseDto,
        prospectdtos::ProspectListResponseDto,
        RequestQueryDto,
    },
    error::HttpError,
    middleware::JWTAuthMiddleware,
    utils::currency::format_cents_as_euros,
    AppState,
};

pub fn affiliates_handler() -> Router {
    Router::new()
        .route("/me", get(get_me))
        .route("/me/bank-info", put(update_bank_info))
        .route("/me/prospects", get(get_my_prospects))
        .route("/me/commissions", get(get_my_commissions))
}

pub async fn get_me(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
) -> Result<impl IntoResponse, HttpError> {
    let link = app_state
        .db_client
        .get_link_by_affiliate(auth.affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AffiliateResponseDto {
        status: "success".to_string(),
        data: AffiliateAccountData {
            affiliate: FilterAffiliateDto::filter_affiliate(&auth.affiliate),
            referral_link: link.map(|l| ReferralLinkDto::from_link(&l, &app_state.env.app_url)),
        },
    }))
}

pub async fn update_bank_info(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    Json(body): Json<UpdateBankInfoDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    body.validate_iban().map_err(|_| {
        HttpError::bad_request("IBAN must be in a valid international format".to_string())
    })?;

    let affiliate = app_state
        .db_client
        .update_bank_info(auth.affiliate.id, body.into_bank_info())
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Affiliate not found".to_string()))?;

    let link = app_state
        .db_client
        .get_link_by_affiliate(affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AffiliateResponseDto {
        status: "success".to_string(),
        data: AffiliateAccountData {
            affiliate: FilterAffiliateDto::filter_affiliate(&affiliate),
            referral_link: link.map(|l| ReferralLinkDto::from_link(&l, &app_state.env.app_url)),
        },
    }))
}

pub async fn get_my_prospects(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
) -> Result<impl IntoResponse, HttpError> {
    let prospects = app_state
        .db_client
        .get_prospects_by_affiliate(auth.affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ProspectListResponseDto {
        status: "success".to_string(),
        results: prospects.len(),
        prospects,
    }))
}

pub async fn get_my_commissions(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
) -> Result<impl IntoResponse, HttpError> {
    let commissions = app_state
        .db_client
        .get_commissions_by_affiliate(auth.affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let totals = app_state
        .db_client
        .get_commission_totals(auth.affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(CommissionListResponseDto {
        status: "success".to_string(),
        results: commissions.len(),
        commissions,
        total_earned: format_cents_as_euros(totals.total_cents),
        total_pending: format_cents_as_euros(totals.unpaid_cents),
    }))
}

// Admin endpoints

pub async fn list_affiliates(
    Query(query_params): Query<RequestQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let overviews = app_state
        .db_client
        .get_affiliate_overviews(page as u32, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let affiliates: Vec<AffiliateOverviewDto> = overviews
        .into_iter()
        .map(AffiliateOverviewDto::from_overview)
        .collect();

    Ok(Json(AffiliateOverviewResponseDto {
        status: "success".to_string(),
        results: affiliates.len(),
        affiliates,
    }))
}

pub async fn update_affiliate_status(
    Path(affiliate_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateAffiliateStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let affiliate = app_state
        .db_client
        .update_affiliate_status(affiliate_id, body.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Affiliate not found".to_string()))?;

    tracing::info!(
        "Affiliate {} status set to {}",
        affiliate.id,
        affiliate.status.to_str()
    );

    let link = app_state
        .db_client
        .get_link_by_affiliate(affiliate.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AffiliateResponseDto {
        status: "success".to_string(),
        data: AffiliateAccountData {
            affiliate: FilterAffiliateDto::filter_affiliate(&affiliate),
            referral_link: link.map(|l| ReferralLinkDto::from_link(&l, &app_state.env.app_url)),
        },
    }))
}

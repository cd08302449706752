use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{affiliatedb::AffiliateExt, prospectdb::ProspectExt, referraldb::ReferralExt},
    dtos::{
        prospectdtos::{
            ReferralLandingDto, SubmitProspectData, SubmitProspectDto, SubmitProspectResponseDto,
        },
        Response,
    },
    error::HttpError,
    AppState,
};

pub fn referral_handler() -> Router {
    Router::new()
        .route("/:code", get(get_referral_landing))
        .route("/:code/click", post(record_click))
        .route("/:code/prospect", post(submit_prospect))
}

pub async fn get_referral_landing(
    Path(code): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let link = app_state
        .db_client
        .get_link_by_code(&code)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Invalid referral code".to_string()))?;

    let affiliate = app_state
        .db_client
        .get_affiliate(Some(link.affiliate_id), None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Invalid referral code".to_string()))?;

    Ok(Json(ReferralLandingDto {
        status: "success".to_string(),
        affiliate_name: affiliate.name,
        code: link.code,
    }))
}

/// Click tracking must never block the landing page: unknown codes and
/// storage failures are logged and swallowed, the visitor always gets 200.
pub async fn record_click(
    Path(code): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    match app_state.db_client.increment_clicks(&code).await {
        Ok(0) => {
            tracing::warn!("Click on unknown referral code {}", code);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!("Failed to record click on referral code {}: {}", code, e);
        }
    }

    Ok(Json(Response {
        status: "success",
        message: "Click recorded".to_string(),
    }))
}

pub async fn submit_prospect(
    Path(code): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<SubmitProspectDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let link = app_state
        .db_client
        .get_link_by_code(&code)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Invalid referral code".to_string()))?;

    let prospect = app_state
        .db_client
        .save_prospect(
            link.affiliate_id,
            body.name.clone(),
            body.email.clone(),
            body.company.clone(),
            body.message,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!(
        "Prospect {} submitted through referral code {} (affiliate {})",
        prospect.id,
        code,
        link.affiliate_id
    );

    // The visitor is handed off to WhatsApp with a prefilled introduction.
    let message = format!(
        "Bonjour, je suis {} de {}.\nJ'aimerais discuter de vos solutions IA.\nMon email : {}",
        body.name, body.company, body.email
    );
    let whatsapp_url = format!(
        "https://wa.me/{}?text={}",
        app_state.env.whatsapp_number,
        urlencoding::encode(&message)
    );

    Ok(Json(SubmitProspectResponseDto {
        status: "success".to_string(),
        data: SubmitProspectData {
            prospect,
            whatsapp_url,
        },
    }))
}

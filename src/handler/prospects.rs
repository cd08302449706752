use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::prospectdb::ProspectExt,
    dtos::{
        prospectdtos::{
            AdminProspectListResponseDto, ProspectResponseDto, UpdateProspectStatusDto,
        },
        RequestQueryDto,
    },
    error::HttpError,
    AppState,
};

pub async fn list_prospects(
    Query(query_params): Query<RequestQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let prospects = app_state
        .db_client
        .get_prospects_with_affiliate(page as u32, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AdminProspectListResponseDto {
        status: "success".to_string(),
        results: prospects.len(),
        prospects,
    }))
}

/// Administrative status edits are deliberately unrestricted: any status
/// can be set from any other. Only invoice issuance moves a prospect to
/// `client` on its own.
pub async fn update_prospect_status(
    Path(prospect_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateProspectStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let prospect = app_state
        .db_client
        .update_prospect_status(prospect_id, body.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Prospect not found".to_string()))?;

    tracing::info!(
        "Prospect {} status set to {}",
        prospect.id,
        prospect.status.to_str()
    );

    Ok(Json(ProspectResponseDto {
        status: "success".to_string(),
        prospect,
    }))
}

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::IntoResponse,
    Extension,
};

use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    db::affiliatedb::AffiliateExt,
    error::{ErrorMessage, HttpError},
    models::affiliatemodel::{Affiliate, AffiliateStatus},
    utils::token,
    AppState,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JWTAuthMiddleware {
    pub affiliate: Affiliate,
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let cookies = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    if auth_value.starts_with("Bearer ") {
                        Some(auth_value[7..].to_owned())
                    } else {
                        None
                    }
                })
        });

    let token = cookies
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::TokenNotProvided.to_string()))?;

    let token_details = match token::decode_token(token, app_state.env.jwt_secret.as_bytes()) {
        Ok(token_details) => token_details,
        Err(_) => {
            return Err(HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()));
        }
    };

    let affiliate_id = uuid::Uuid::parse_str(&token_details)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let affiliate = app_state
        .db_client
        .get_affiliate(Some(affiliate_id), None)
        .await
        .map_err(|_| HttpError::unauthorized(ErrorMessage::AffiliateNoLongerExist.to_string()))?;

    let affiliate = affiliate
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::AffiliateNoLongerExist.to_string()))?;

    // Status is re-checked on every request, not only at login, so a
    // suspension takes effect immediately.
    if affiliate.status == AffiliateStatus::Suspended {
        return Err(HttpError::new(
            ErrorMessage::AffiliateSuspended.to_string(),
            StatusCode::FORBIDDEN,
        ));
    }

    req.extensions_mut().insert(JWTAuthMiddleware {
        affiliate: affiliate.clone(),
    });

    Ok(next.run(req).await)
}

pub async fn require_admin(
    Extension(app_state): Extension<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let auth = req
        .extensions()
        .get::<JWTAuthMiddleware>()
        .ok_or_else(|| {
            HttpError::unauthorized(ErrorMessage::AffiliateNotAuthenticated.to_string())
        })?;

    if auth.affiliate.email != app_state.env.admin_email {
        return Err(HttpError::new(
            ErrorMessage::PermissionDenied.to_string(),
            StatusCode::FORBIDDEN,
        ));
    }

    Ok(next.run(req).await)
}

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use axum_extra::extract::cookie::Cookie;
use validator::Validate;

use crate::{
    db::affiliatedb::AffiliateExt,
    dtos::{
        affiliatedtos::{
            AffiliateAccountData, AffiliateResponseDto, FilterAffiliateDto, LoginAffiliateDto,
            LoginResponseDto, ReferralLinkDto, RegisterAffiliateDto,
        },
        Response,
    },
    error::{ErrorMessage, HttpError},
    service::referral::generate_referral_code,
    utils::{password, token},
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterAffiliateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_affiliate(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::EmailExist.to_string(),
        ));
    }

    let hashed_password =
        password::hash(&body.password).map_err(|e| HttpError::server_error(e.to_string()))?;

    let referral_code = generate_referral_code(&body.name);

    let (affiliate, link) = app_state
        .db_client
        .save_affiliate(body.name, body.email, hashed_password, referral_code)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map_or(false, |db_err| db_err.is_unique_violation())
            {
                HttpError::unique_constraint_violation(ErrorMessage::EmailExist.to_string())
            } else {
                HttpError::server_error(e.to_string())
            }
        })?;

    tracing::info!(
        "New affiliate {} registered with referral code {}",
        affiliate.email,
        link.code
    );

    Ok(Json(AffiliateResponseDto {
        status: "success".to_string(),
        data: AffiliateAccountData {
            affiliate: FilterAffiliateDto::filter_affiliate(&affiliate),
            referral_link: Some(ReferralLinkDto::from_link(&link, &app_state.env.app_url)),
        },
    }))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginAffiliateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state
        .db_client
        .get_affiliate(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let affiliate =
        result.ok_or(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    let password_matched = password::compare(&body.password, &affiliate.password)
        .map_err(|_| HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    if password_matched {
        let token = token::create_token(
            &affiliate.id.to_string(),
            app_state.env.jwt_secret.as_bytes(),
            app_state.env.jwt_maxage,
        )
        .map_err(|e| HttpError::server_error(e.to_string()))?;

        let cookie_duration = time::Duration::minutes(app_state.env.jwt_maxage);
        let cookie = Cookie::build(("token", token.clone()))
            .path("/")
            .max_age(cookie_duration)
            .http_only(true)
            .build();

        let response = Json(LoginResponseDto {
            status: "success".to_string(),
            token,
        });

        let mut headers = HeaderMap::new();

        headers.append(header::SET_COOKIE, cookie.to_string().parse().unwrap());

        let mut response = response.into_response();
        response.headers_mut().extend(headers);

        Ok(response)
    } else {
        Err(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))
    }
}

pub async fn logout() -> Result<impl IntoResponse, HttpError> {
    let cookie = Cookie::build(("token", ""))
        .path("/")
        .max_age(time::Duration::minutes(-1))
        .http_only(true)
        .build();

    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, cookie.to_string().parse().unwrap());

    let mut response = Json(Response {
        status: "success",
        message: "Logged out successfully".to_string(),
    })
    .into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

// routes.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{auth::auth_handler, affiliates::affiliates_handler, referral::referral_handler},
    middleware::{auth, require_admin},
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let admin_routes = Router::new()
        .route("/affiliates", get(crate::handler::affiliates::list_affiliates))
        .route(
            "/affiliates/:affiliate_id/status",
            put(crate::handler::affiliates::update_affiliate_status),
        )
        .route("/prospects", get(crate::handler::prospects::list_prospects))
        .route(
            "/prospects/:prospect_id/status",
            put(crate::handler::prospects::update_prospect_status),
        )
        .route(
            "/invoices",
            post(crate::handler::invoices::issue_invoice)
                .get(crate::handler::invoices::list_invoices),
        )
        .route(
            "/commissions/:commission_id/paid",
            put(crate::handler::invoices::mark_commission_paid),
        )
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn(auth));

    let api_route = Router::new()
        .nest("/auth", auth_handler())
        .nest("/referral", referral_handler())
        .nest(
            "/affiliates",
            affiliates_handler().layer(middleware::from_fn(auth)),
        )
        .nest("/admin", admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}

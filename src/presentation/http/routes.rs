// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::lead_rate_limit_layer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{leads, projects, properties, templates},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/{locale}/properties", get(properties::list_public))
        .route(
            "/api/v1/{locale}/properties/by-slug/{slug}",
            get(properties::get_by_slug),
        )
        .route("/api/v1/{locale}/projects", get(projects::list_public))
        .route(
            "/api/v1/{locale}/projects/by-slug/{slug}",
            get(projects::get_by_slug),
        )
        .route(
            "/api/v1/{locale}/leads",
            post(leads::submit).layer(lead_rate_limit_layer()),
        )
        .route(
            "/api/v1/admin/properties",
            get(properties::list_admin).post(properties::create),
        )
        .route(
            "/api/v1/admin/properties/{id}",
            get(properties::get_admin)
                .put(properties::update)
                .delete(properties::remove),
        )
        .route(
            "/api/v1/admin/properties/{id}/publish",
            post(properties::set_publish_state),
        )
        .route(
            "/api/v1/admin/projects",
            get(projects::list_admin).post(projects::create),
        )
        .route(
            "/api/v1/admin/projects/{id}",
            put(projects::update).delete(projects::remove),
        )
        .route("/api/v1/admin/leads", get(leads::list))
        .route("/api/v1/admin/leads/{id}/status", post(leads::update_status))
        .route("/api/v1/admin/leads/{id}", delete(leads::remove))
        .route(
            "/api/v1/admin/templates",
            get(templates::list).post(templates::save),
        )
        .route(
            "/api/v1/admin/templates/auto-fill",
            get(templates::auto_fill_defaults),
        )
        .route("/api/v1/admin/templates/{id}", delete(templates::remove))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

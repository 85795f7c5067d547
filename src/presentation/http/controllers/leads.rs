// src/presentation/http/controllers/leads.rs
use crate::application::{
    commands::leads::{DeleteLeadCommand, SubmitLeadCommand, UpdateLeadStatusCommand},
    dto::{CursorPage, LeadDto},
    queries::leads::ListLeadsQuery,
};
use crate::presentation::http::controllers::require_locale;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SubmitLeadRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Listing the form was sent from, if any.
    pub property_id: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeadListParams {
    /// `new`, `contacted` or `closed`.
    pub status: Option<String>,
    #[serde(default)]
    pub limit: u32,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LeadStatusRequest {
    pub status: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/{locale}/leads",
    params(("locale" = String, Path, description = "Site locale")),
    request_body = SubmitLeadRequest,
    responses(
        (status = 200, description = "Stored lead.", body = LeadDto),
        (status = 400, description = "Malformed submission."),
        (status = 404, description = "Unsupported locale."),
        (status = 429, description = "Too many submissions from this address.")
    ),
    tag = "Leads"
)]
pub async fn submit(
    Extension(state): Extension<HttpState>,
    Path(locale): Path<String>,
    Json(payload): Json<SubmitLeadRequest>,
) -> HttpResult<Json<LeadDto>> {
    let locale = require_locale(&locale)?;
    state
        .services
        .lead_commands
        .submit_lead(SubmitLeadCommand {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            message: payload.message,
            locale,
            property_id: payload.property_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/leads",
    params(LeadListParams),
    responses((status = 200, description = "Leads page, newest first.", body = CursorPage<LeadDto>)),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Query(params): Query<LeadListParams>,
) -> HttpResult<Json<CursorPage<LeadDto>>> {
    state
        .services
        .lead_queries
        .list_leads(ListLeadsQuery {
            status: params.status,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/leads/{id}/status",
    params(("id" = i64, Path, description = "Lead id")),
    request_body = LeadStatusRequest,
    responses(
        (status = 200, description = "Lead with the new status.", body = LeadDto),
        (status = 404, description = "Unknown id.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn update_status(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<LeadStatusRequest>,
) -> HttpResult<Json<LeadDto>> {
    state
        .services
        .lead_commands
        .update_lead_status(UpdateLeadStatusCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/leads/{id}",
    params(("id" = i64, Path, description = "Lead id")),
    responses(
        (status = 200, description = "Lead deleted."),
        (status = 404, description = "Unknown id.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn remove(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .lead_commands
        .delete_lead(DeleteLeadCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

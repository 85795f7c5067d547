// src/presentation/http/controllers/templates.rs
use crate::application::{
    commands::templates::{DeleteTemplateCommand, SaveTemplateCommand},
    dto::{FeatureTemplateDto, SavedTemplateDto},
    queries::templates::{AutoFillQuery, ListTemplatesQuery},
};
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
pub struct SaveTemplateRequest {
    pub name: String,
    pub features: FeatureTemplateDto,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AutoFillParams {
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub location: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/templates",
    responses((status = 200, description = "All saved templates.", body = [SavedTemplateDto])),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
) -> HttpResult<Json<Vec<SavedTemplateDto>>> {
    state
        .services
        .template_queries
        .list_templates(ListTemplatesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/templates",
    request_body = SaveTemplateRequest,
    responses(
        (status = 200, description = "Saved template.", body = SavedTemplateDto),
        (status = 400, description = "Label outside the controlled vocabulary."),
        (status = 409, description = "Template name already taken.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn save(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Json(payload): Json<SaveTemplateRequest>,
) -> HttpResult<Json<SavedTemplateDto>> {
    state
        .services
        .template_commands
        .save_template(SaveTemplateCommand {
            name: payload.name,
            features: payload.features,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/templates/{id}",
    params(("id" = i64, Path, description = "Template id")),
    responses(
        (status = 200, description = "Template deleted."),
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
        .template_commands
        .delete_template(DeleteTemplateCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/templates/auto-fill",
    params(AutoFillParams),
    responses((status = 200, description = "Derived defaults for the listing form.", body = FeatureTemplateDto)),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn auto_fill_defaults(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Query(params): Query<AutoFillParams>,
) -> HttpResult<Json<FeatureTemplateDto>> {
    state
        .services
        .template_queries
        .auto_fill_defaults(AutoFillQuery {
            property_type: params.property_type,
            location: params.location,
        })
        .into_http()
        .map(Json)
}

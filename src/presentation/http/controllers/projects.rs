// src/presentation/http/controllers/projects.rs
use crate::application::{
    commands::projects::{CreateProjectCommand, DeleteProjectCommand, UpdateProjectCommand},
    dto::{CursorPage, ProjectDto},
    queries::projects::{GetProjectBySlugQuery, ListProjectsQuery},
};
use crate::presentation::http::controllers::require_locale;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminSession, MaybeAdmin};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectListParams {
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default)]
    pub limit: u32,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub developer: String,
    pub completion_year: Option<i16>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub developer: Option<String>,
    /// Present-but-null clears the completion year; absent leaves it alone.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i16>)]
    pub completion_year: Option<Option<i16>>,
    pub publish: Option<bool>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i16>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/projects",
    params(("locale" = String, Path, description = "Site locale"), ProjectListParams),
    responses(
        (status = 200, description = "Published projects page.", body = CursorPage<ProjectDto>),
        (status = 404, description = "Unsupported locale.")
    ),
    tag = "Projects"
)]
pub async fn list_public(
    Extension(state): Extension<HttpState>,
    Path(locale): Path<String>,
    Query(params): Query<ProjectListParams>,
) -> HttpResult<Json<CursorPage<ProjectDto>>> {
    require_locale(&locale)?;
    state
        .services
        .project_queries
        .list_projects(ListProjectsQuery {
            include_drafts: false,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/projects/by-slug/{slug}",
    params(
        ("locale" = String, Path, description = "Site locale"),
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "A single project.", body = ProjectDto),
        (status = 404, description = "Unknown slug, draft project or unsupported locale.")
    ),
    tag = "Projects"
)]
pub async fn get_by_slug(
    Extension(state): Extension<HttpState>,
    admin: MaybeAdmin,
    Path((locale, slug)): Path<(String, String)>,
) -> HttpResult<Json<ProjectDto>> {
    require_locale(&locale)?;
    state
        .services
        .project_queries
        .get_project_by_slug(GetProjectBySlugQuery {
            slug,
            include_drafts: admin.0,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/projects",
    params(ProjectListParams),
    responses((status = 200, description = "Projects page, drafts included on request.", body = CursorPage<ProjectDto>)),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list_admin(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Query(params): Query<ProjectListParams>,
) -> HttpResult<Json<CursorPage<ProjectDto>>> {
    state
        .services
        .project_queries
        .list_projects(ListProjectsQuery {
            include_drafts: params.include_drafts,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Created project with its generated slug.", body = ProjectDto),
        (status = 409, description = "Slug namespace conflict; retry.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Json(payload): Json<CreateProjectRequest>,
) -> HttpResult<Json<ProjectDto>> {
    state
        .services
        .project_commands
        .create_project(CreateProjectCommand {
            name: payload.name,
            description: payload.description,
            location: payload.location,
            developer: payload.developer,
            completion_year: payload.completion_year,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated project.", body = ProjectDto),
        (status = 404, description = "Unknown id."),
        (status = 409, description = "Concurrent edit; reload and retry.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> HttpResult<Json<ProjectDto>> {
    state
        .services
        .project_commands
        .update_project(UpdateProjectCommand {
            id,
            name: payload.name,
            description: payload.description,
            location: payload.location,
            developer: payload.developer,
            completion_year: payload.completion_year,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted."),
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
        .project_commands
        .delete_project(DeleteProjectCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

// src/presentation/http/controllers/properties.rs
use crate::application::{
    commands::properties::{
        CreatePropertyCommand, DeletePropertyCommand, SetPublishStateCommand,
        UpdatePropertyCommand,
    },
    dto::{CursorPage, PropertyDto, templates::FeatureTemplateDto},
    queries::properties::{GetPropertyByIdQuery, GetPropertyBySlugQuery, ListPropertiesQuery},
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
pub struct PropertyListParams {
    /// `sale` or `rent`.
    pub offer: Option<String>,
    /// `condo`, `house`, `villa`, `townhouse` or `land`.
    pub property_type: Option<String>,
    /// Lower price bound in satang.
    pub min_price: Option<i64>,
    /// Upper price bound in satang.
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i16>,
    /// Substring match against the location text.
    pub location: Option<String>,
    #[serde(default)]
    pub limit: u32,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminPropertyListParams {
    #[serde(default)]
    pub include_drafts: bool,
    pub offer: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i16>,
    pub location: Option<String>,
    #[serde(default)]
    pub limit: u32,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePropertyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: String,
    pub offer: String,
    pub price: i64,
    #[serde(default)]
    pub bedrooms: i16,
    #[serde(default)]
    pub bathrooms: i16,
    #[serde(default)]
    pub area_sqm: i32,
    pub location: String,
    /// Omit to pre-fill from the property type and location.
    pub features: Option<FeatureTemplateDto>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub offer: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i16>,
    pub bathrooms: Option<i16>,
    pub area_sqm: Option<i32>,
    pub location: Option<String>,
    pub features: Option<FeatureTemplateDto>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

fn list_query(params: PropertyListParams, include_drafts: bool) -> ListPropertiesQuery {
    ListPropertiesQuery {
        offer: params.offer,
        property_type: params.property_type,
        min_price: params.min_price,
        max_price: params.max_price,
        min_bedrooms: params.min_bedrooms,
        location: params.location,
        include_drafts,
        limit: params.limit,
        cursor: params.cursor,
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/properties",
    params(("locale" = String, Path, description = "Site locale"), PropertyListParams),
    responses(
        (status = 200, description = "Published listings page.", body = CursorPage<PropertyDto>),
        (status = 404, description = "Unsupported locale.")
    ),
    tag = "Properties"
)]
pub async fn list_public(
    Extension(state): Extension<HttpState>,
    Path(locale): Path<String>,
    Query(params): Query<PropertyListParams>,
) -> HttpResult<Json<CursorPage<PropertyDto>>> {
    require_locale(&locale)?;
    state
        .services
        .property_queries
        .list_properties(list_query(params, false))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/properties/by-slug/{slug}",
    params(
        ("locale" = String, Path, description = "Site locale"),
        ("slug" = String, Path, description = "Listing slug")
    ),
    responses(
        (status = 200, description = "A single listing.", body = PropertyDto),
        (status = 404, description = "Unknown slug, draft listing or unsupported locale.")
    ),
    tag = "Properties"
)]
pub async fn get_by_slug(
    Extension(state): Extension<HttpState>,
    admin: MaybeAdmin,
    Path((locale, slug)): Path<(String, String)>,
) -> HttpResult<Json<PropertyDto>> {
    require_locale(&locale)?;
    state
        .services
        .property_queries
        .get_property_by_slug(GetPropertyBySlugQuery {
            slug,
            include_drafts: admin.0,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/properties",
    params(AdminPropertyListParams),
    responses((status = 200, description = "Listings page, drafts included on request.", body = CursorPage<PropertyDto>)),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list_admin(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Query(params): Query<AdminPropertyListParams>,
) -> HttpResult<Json<CursorPage<PropertyDto>>> {
    let include_drafts = params.include_drafts;
    let params = PropertyListParams {
        offer: params.offer,
        property_type: params.property_type,
        min_price: params.min_price,
        max_price: params.max_price,
        min_bedrooms: params.min_bedrooms,
        location: params.location,
        limit: params.limit,
        cursor: params.cursor,
    };
    state
        .services
        .property_queries
        .list_properties(list_query(params, include_drafts))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Listing by id, draft or not.", body = PropertyDto),
        (status = 404, description = "Unknown id.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn get_admin(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<PropertyDto>> {
    state
        .services
        .property_queries
        .get_property_by_id(GetPropertyByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 200, description = "Created listing with its generated slug.", body = PropertyDto),
        (status = 409, description = "Slug namespace conflict; retry.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Json(payload): Json<CreatePropertyRequest>,
) -> HttpResult<Json<PropertyDto>> {
    let command = CreatePropertyCommand {
        title: payload.title,
        description: payload.description,
        property_type: payload.property_type,
        offer: payload.offer,
        price: payload.price,
        bedrooms: payload.bedrooms,
        bathrooms: payload.bathrooms,
        area_sqm: payload.area_sqm,
        location: payload.location,
        features: payload.features,
        publish: payload.publish,
    };

    state
        .services
        .property_commands
        .create_property(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Updated listing.", body = PropertyDto),
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
    Json(payload): Json<UpdatePropertyRequest>,
) -> HttpResult<Json<PropertyDto>> {
    let command = UpdatePropertyCommand {
        id,
        title: payload.title,
        description: payload.description,
        property_type: payload.property_type,
        offer: payload.offer,
        price: payload.price,
        bedrooms: payload.bedrooms,
        bathrooms: payload.bathrooms,
        area_sqm: payload.area_sqm,
        location: payload.location,
        features: payload.features,
        publish: payload.publish,
    };

    state
        .services
        .property_commands
        .update_property(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Listing deleted."),
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
        .property_commands
        .delete_property(DeletePropertyCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/properties/{id}/publish",
    params(("id" = i64, Path, description = "Property id")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Listing with the new publish state.", body = PropertyDto),
        (status = 404, description = "Unknown id.")
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PropertyDto>> {
    state
        .services
        .property_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::properties::list_public,
        crate::presentation::http::controllers::properties::get_by_slug,
        crate::presentation::http::controllers::properties::list_admin,
        crate::presentation::http::controllers::properties::get_admin,
        crate::presentation::http::controllers::properties::create,
        crate::presentation::http::controllers::properties::update,
        crate::presentation::http::controllers::properties::remove,
        crate::presentation::http::controllers::properties::set_publish_state,
        crate::presentation::http::controllers::projects::list_public,
        crate::presentation::http::controllers::projects::get_by_slug,
        crate::presentation::http::controllers::projects::list_admin,
        crate::presentation::http::controllers::projects::create,
        crate::presentation::http::controllers::projects::update,
        crate::presentation::http::controllers::projects::remove,
        crate::presentation::http::controllers::leads::submit,
        crate::presentation::http::controllers::leads::list,
        crate::presentation::http::controllers::leads::update_status,
        crate::presentation::http::controllers::leads::remove,
        crate::presentation::http::controllers::templates::list,
        crate::presentation::http::controllers::templates::save,
        crate::presentation::http::controllers::templates::remove,
        crate::presentation::http::controllers::templates::auto_fill_defaults,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::properties::CreatePropertyRequest,
            crate::presentation::http::controllers::properties::UpdatePropertyRequest,
            crate::presentation::http::controllers::properties::PublishRequest,
            crate::presentation::http::controllers::projects::CreateProjectRequest,
            crate::presentation::http::controllers::projects::UpdateProjectRequest,
            crate::presentation::http::controllers::leads::SubmitLeadRequest,
            crate::presentation::http::controllers::leads::LeadStatusRequest,
            crate::presentation::http::controllers::templates::SaveTemplateRequest,
            crate::application::dto::PropertyDto,
            crate::application::dto::ProjectDto,
            crate::application::dto::LeadDto,
            crate::application::dto::SavedTemplateDto,
            crate::application::dto::FeatureTemplateDto
        )
    ),
    tags(
        (name = "Properties", description = "Public buy/rent listing endpoints"),
        (name = "Projects", description = "Public development project endpoints"),
        (name = "Leads", description = "Contact lead submission"),
        (name = "Admin", description = "Back-office management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Baan API",
        description = "Multilingual real-estate listing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "adminToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    // Swagger UI owns /docs and its own copy of the spec; /openapi.json
    // stays a plain route for tooling.
    let swagger = SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

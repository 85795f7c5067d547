// src/application/dto/projects.rs
use crate::domain::project::Project;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    pub developer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_year: Option<i16>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.into(),
            name: project.name.into(),
            slug: project.slug.into(),
            description: project.description,
            location: project.location,
            developer: project.developer,
            completion_year: project.completion_year,
            published: project.published,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

// src/application/queries/projects/get_by_slug.rs
use super::ProjectQueryService;
use crate::{
    application::{
        dto::ProjectDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetProjectBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

impl ProjectQueryService {
    pub async fn get_project_by_slug(
        &self,
        query: GetProjectBySlugQuery,
    ) -> ApplicationResult<ProjectDto> {
        let slug = Slug::new(query.slug)?;
        let project = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|project| project.published || query.include_drafts)
            .ok_or_else(|| ApplicationError::not_found("project not found"))?;

        Ok(project.into())
    }
}

// src/domain/project/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::ListCursor;
use crate::domain::project::entity::{NewProject, Project, ProjectUpdate};
use crate::domain::project::value_objects::ProjectId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ProjectWriteRepository: Send + Sync {
    async fn insert(&self, project: NewProject) -> DomainResult<Project>;
    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project>;
    async fn delete(&self, id: ProjectId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProjectReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Project>>;
    async fn list_page(
        &self,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Project>, Option<ListCursor>)>;
}

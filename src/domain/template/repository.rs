// src/domain/template/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::template::entity::{NewSavedTemplate, SavedTemplate, TemplateId};
use async_trait::async_trait;

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn insert(&self, template: NewSavedTemplate) -> DomainResult<SavedTemplate>;
    async fn find_by_id(&self, id: TemplateId) -> DomainResult<Option<SavedTemplate>>;
    async fn list(&self) -> DomainResult<Vec<SavedTemplate>>;
    async fn delete(&self, id: TemplateId) -> DomainResult<()>;
}

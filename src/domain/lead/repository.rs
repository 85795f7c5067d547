// src/domain/lead/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::lead::entity::{Lead, NewLead};
use crate::domain::lead::value_objects::{LeadId, LeadStatus};
use crate::domain::pagination::ListCursor;
use async_trait::async_trait;

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead>;
    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>>;
    async fn list_page(
        &self,
        status: Option<LeadStatus>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Lead>, Option<ListCursor>)>;
    async fn set_status(
        &self,
        id: LeadId,
        status: LeadStatus,
        updated_at: chrono::DateTime<chrono::Utc>,
    ) -> DomainResult<Lead>;
    async fn delete(&self, id: LeadId) -> DomainResult<()>;
}

// src/domain/property/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::ListCursor;
use crate::domain::property::entity::{NewProperty, Property, PropertyUpdate};
use crate::domain::property::filter::PropertyFilter;
use crate::domain::property::value_objects::PropertyId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PropertyWriteRepository: Send + Sync {
    async fn insert(&self, property: NewProperty) -> DomainResult<Property>;
    async fn update(&self, update: PropertyUpdate) -> DomainResult<Property>;
    async fn delete(&self, id: PropertyId) -> DomainResult<()>;
}

#[async_trait]
pub trait PropertyReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Property>>;
    async fn list_page(
        &self,
        filter: &PropertyFilter,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Property>, Option<ListCursor>)>;
}

// src/application/queries/properties/get_by_slug.rs
use super::PropertyQueryService;
use crate::{
    application::{
        dto::PropertyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPropertyBySlugQuery {
    pub slug: String,
    /// Admin callers may fetch drafts; the public surface reports them as
    /// missing rather than forbidden.
    pub include_drafts: bool,
}

impl PropertyQueryService {
    pub async fn get_property_by_slug(
        &self,
        query: GetPropertyBySlugQuery,
    ) -> ApplicationResult<PropertyDto> {
        let slug = Slug::new(query.slug)?;
        let property = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|property| property.published || query.include_drafts)
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;

        Ok(property.into())
    }
}

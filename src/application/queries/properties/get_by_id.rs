// src/application/queries/properties/get_by_id.rs
use super::PropertyQueryService;
use crate::{
    application::{
        dto::PropertyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::property::PropertyId,
};

pub struct GetPropertyByIdQuery {
    pub id: i64,
}

impl PropertyQueryService {
    /// Admin edit form loads by id, drafts included.
    pub async fn get_property_by_id(
        &self,
        query: GetPropertyByIdQuery,
    ) -> ApplicationResult<PropertyDto> {
        let id = PropertyId::new(query.id)?;
        let property = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;
        Ok(property.into())
    }
}

// src/application/queries/templates/autofill.rs
use super::TemplateQueryService;
use crate::{
    application::{dto::FeatureTemplateDto, error::ApplicationResult},
    domain::template::auto_fill,
};

/// Inputs are raw strings on purpose: an unrecognized property type is not
/// an error, it just produces an emptier template.
pub struct AutoFillQuery {
    pub property_type: String,
    pub location: String,
}

impl TemplateQueryService {
    pub fn auto_fill_defaults(&self, query: AutoFillQuery) -> ApplicationResult<FeatureTemplateDto> {
        Ok(auto_fill(&query.property_type, &query.location).into())
    }
}

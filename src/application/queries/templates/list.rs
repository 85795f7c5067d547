// src/application/queries/templates/list.rs
use super::TemplateQueryService;
use crate::application::{dto::SavedTemplateDto, error::ApplicationResult};

pub struct ListTemplatesQuery;

impl TemplateQueryService {
    /// Saved templates are few; no pagination on this listing.
    pub async fn list_templates(
        &self,
        _query: ListTemplatesQuery,
    ) -> ApplicationResult<Vec<SavedTemplateDto>> {
        let templates = self.template_repo.list().await?;
        Ok(templates.into_iter().map(Into::into).collect())
    }
}

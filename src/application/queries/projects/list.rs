// src/application/queries/projects/list.rs
use super::ProjectQueryService;
use crate::application::{
    dto::{CursorPage, ProjectDto},
    error::ApplicationResult,
    queries::{decode_cursor, normalize_limit},
};

pub struct ListProjectsQuery {
    pub include_drafts: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ProjectQueryService {
    pub async fn list_projects(
        &self,
        query: ListProjectsQuery,
    ) -> ApplicationResult<CursorPage<ProjectDto>> {
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(query.include_drafts, limit, cursor)
            .await?;

        Ok(CursorPage::from_records(records, next_cursor))
    }
}

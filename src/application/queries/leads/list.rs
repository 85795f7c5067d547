// src/application/queries/leads/list.rs
use super::LeadQueryService;
use crate::{
    application::{
        dto::{CursorPage, LeadDto},
        error::ApplicationResult,
        queries::{decode_cursor, normalize_limit},
    },
    domain::lead::LeadStatus,
};

pub struct ListLeadsQuery {
    pub status: Option<String>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl LeadQueryService {
    pub async fn list_leads(&self, query: ListLeadsQuery) -> ApplicationResult<CursorPage<LeadDto>> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<LeadStatus>)
            .transpose()?;
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self.lead_repo.list_page(status, limit, cursor).await?;
        Ok(CursorPage::from_records(records, next_cursor))
    }
}

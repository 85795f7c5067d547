// src/application/dto/pagination.rs
use crate::domain::pagination::ListCursor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            items,
            next_cursor,
            has_more,
        }
    }

    /// Map domain records into DTOs and encode the continuation cursor in
    /// one step; every listing query ends with this.
    pub fn from_records<R: Into<T>>(records: Vec<R>, next: Option<ListCursor>) -> Self {
        Self::new(
            records.into_iter().map(Into::into).collect(),
            next.map(|cursor| cursor.encode()),
        )
    }
}

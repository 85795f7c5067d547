// src/application/queries/properties/list.rs
use super::PropertyQueryService;
use crate::{
    application::{
        dto::{CursorPage, PropertyDto},
        error::ApplicationResult,
        queries::{decode_cursor, normalize_limit},
    },
    domain::property::{OfferKind, PropertyFilter, PropertyType},
};

pub struct ListPropertiesQuery {
    pub offer: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i16>,
    pub location: Option<String>,
    pub include_drafts: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl PropertyQueryService {
    /// `include_drafts` is only honored for admin callers; controllers pass
    /// `false` on the public surface.
    pub async fn list_properties(
        &self,
        query: ListPropertiesQuery,
    ) -> ApplicationResult<CursorPage<PropertyDto>> {
        let filter = PropertyFilter {
            offer: query
                .offer
                .as_deref()
                .map(str::parse::<OfferKind>)
                .transpose()?,
            property_type: query
                .property_type
                .as_deref()
                .map(str::parse::<PropertyType>)
                .transpose()?,
            min_price: query.min_price,
            max_price: query.max_price,
            min_bedrooms: query.min_bedrooms,
            location: query
                .location
                .map(|raw| raw.trim().to_string())
                .filter(|location| !location.is_empty()),
        };
        filter.validate()?;

        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(&filter, query.include_drafts, limit, cursor)
            .await?;

        Ok(CursorPage::from_records(records, next_cursor))
    }
}

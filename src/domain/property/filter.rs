// src/domain/property/filter.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::property::value_objects::{OfferKind, PropertyType};

/// Listing filters for the public search surface. All criteria are optional
/// and combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub offer: Option<OfferKind>,
    pub property_type: Option<PropertyType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i16>,
    /// Case-insensitive substring match against the location text.
    pub location: Option<String>,
}

impl PropertyFilter {
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(DomainError::Validation(
                    "min_price cannot exceed max_price".into(),
                ));
            }
        }
        if self.min_price.is_some_and(|p| p < 0) || self.max_price.is_some_and(|p| p < 0) {
            return Err(DomainError::Validation("price bounds cannot be negative".into()));
        }
        Ok(())
    }
}

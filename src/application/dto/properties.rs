// src/application/dto/properties.rs
use crate::application::dto::templates::FeatureTemplateDto;
use crate::domain::property::{OfferKind, Property, PropertyType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[schema(value_type = String, example = "condo")]
    pub property_type: PropertyType,
    #[schema(value_type = String, example = "sale")]
    pub offer: OfferKind,
    /// Satang; rent offers are per month.
    pub price: i64,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub area_sqm: i32,
    pub location: String,
    pub features: FeatureTemplateDto,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyDto {
    fn from(property: Property) -> Self {
        Self {
            id: property.id.into(),
            title: property.title.into(),
            slug: property.slug.into(),
            description: property.description,
            property_type: property.property_type,
            offer: property.offer,
            price: property.price.into(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area_sqm: property.area_sqm,
            location: property.location,
            features: property.features.into(),
            published: property.published,
            published_at: property.published_at,
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

// src/domain/property/entity.rs
use crate::domain::property::value_objects::{
    OfferKind, Price, PropertyId, PropertyTitle, PropertyType,
};
use crate::domain::slug::Slug;
use crate::domain::template::FeatureTemplate;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Property {
    pub id: PropertyId,
    pub title: PropertyTitle,
    pub slug: Slug,
    pub description: String,
    pub property_type: PropertyType,
    pub offer: OfferKind,
    pub price: Price,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub area_sqm: i32,
    pub location: String,
    pub features: FeatureTemplate,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: PropertyTitle,
    pub slug: Slug,
    pub description: String,
    pub property_type: PropertyType,
    pub offer: OfferKind,
    pub price: Price,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub area_sqm: i32,
    pub location: String,
    pub features: FeatureTemplate,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update with optimistic concurrency: the repository applies it
/// only while `updated_at` still equals `original_updated_at`.
#[derive(Debug, Clone)]
pub struct PropertyUpdate {
    pub id: PropertyId,
    pub title: Option<PropertyTitle>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub offer: Option<OfferKind>,
    pub price: Option<Price>,
    pub bedrooms: Option<i16>,
    pub bathrooms: Option<i16>,
    pub area_sqm: Option<i32>,
    pub location: Option<String>,
    pub features: Option<FeatureTemplate>,
    pub publish_state: Option<PublishStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyUpdate {
    pub fn new(id: PropertyId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            property_type: None,
            offer: None,
            price: None,
            bedrooms: None,
            bathrooms: None,
            area_sqm: None,
            location: None,
            features: None,
            publish_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.property_type.is_none()
            && self.offer.is_none()
            && self.price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.area_sqm.is_none()
            && self.location.is_none()
            && self.features.is_none()
            && self.publish_state.is_none()
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

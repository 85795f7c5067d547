// tests/support/builders.rs
#![allow(dead_code)]

use chrono::Utc;

use baan_core::domain::property::*;
use baan_core::domain::slug::Slug;
use baan_core::domain::template::FeatureTemplate;

pub struct PropertyBuilder {
    id: i64,
    title: String,
    slug: String,
    property_type: PropertyType,
    offer: OfferKind,
    price: i64,
    bedrooms: i16,
    location: String,
    published: bool,
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Condo".into(),
            slug: "test-condo".into(),
            property_type: PropertyType::Condo,
            offer: OfferKind::Sale,
            price: 250_000_000,
            bedrooms: 1,
            location: "Pattaya".into(),
            published: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn offer(mut self, offer: OfferKind) -> Self {
        self.offer = offer;
        self
    }

    pub fn price(mut self, satang: i64) -> Self {
        self.price = satang;
        self
    }

    pub fn bedrooms(mut self, bedrooms: i16) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Property {
        let now = Utc::now();
        Property {
            id: PropertyId::new(self.id).unwrap(),
            title: PropertyTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            description: "Test description".into(),
            property_type: self.property_type,
            offer: self.offer,
            price: Price::new(self.price).unwrap(),
            bedrooms: self.bedrooms,
            bathrooms: 1,
            area_sqm: 45,
            location: self.location,
            features: FeatureTemplate::default(),
            published: self.published,
            published_at: if self.published { Some(now) } else { None },
            created_at: now,
            updated_at: now,
        }
    }
}

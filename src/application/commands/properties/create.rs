// src/application/commands/properties/create.rs
use super::PropertyCommandService;
use crate::{
    application::{
        dto::{PropertyDto, templates::FeatureTemplateDto},
        error::ApplicationResult,
    },
    domain::{
        property::{NewProperty, OfferKind, Price, PropertyTitle, PropertyType},
        slug::SlugKind,
        template::{FeatureTemplate, auto_fill},
    },
};

pub struct CreatePropertyCommand {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub offer: String,
    pub price: i64,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub area_sqm: i32,
    pub location: String,
    /// When absent, defaults are derived from the property type and location.
    pub features: Option<FeatureTemplateDto>,
    pub publish: bool,
}

impl PropertyCommandService {
    pub async fn create_property(
        &self,
        command: CreatePropertyCommand,
    ) -> ApplicationResult<PropertyDto> {
        let title = PropertyTitle::new(command.title)?;
        let property_type: PropertyType = command.property_type.parse()?;
        let offer: OfferKind = command.offer.parse()?;
        let price = Price::new(command.price)?;

        let features: FeatureTemplate = match command.features {
            Some(dto) => dto.into(),
            None => auto_fill(property_type.as_str(), &command.location),
        };
        features.validate()?;

        let now = self.clock.now();
        let slug = self
            .slug_service
            .generate(SlugKind::Property, title.as_str(), None)
            .await?;

        let new_property = NewProperty {
            title,
            slug,
            description: command.description,
            property_type,
            offer,
            price,
            bedrooms: command.bedrooms,
            bathrooms: command.bathrooms,
            area_sqm: command.area_sqm,
            location: command.location,
            features,
            published: command.publish,
            published_at: if command.publish { Some(now) } else { None },
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_property).await?;
        Ok(created.into())
    }
}

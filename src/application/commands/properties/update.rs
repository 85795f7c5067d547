// src/application/commands/properties/update.rs
use super::PropertyCommandService;
use crate::{
    application::{
        dto::{PropertyDto, templates::FeatureTemplateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        property::{
            OfferKind, Price, Property, PropertyId, PropertyTitle, PropertyType, PropertyUpdate,
        },
        slug::SlugKind,
        template::FeatureTemplate,
    },
};

pub struct UpdatePropertyCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub offer: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i16>,
    pub bathrooms: Option<i16>,
    pub area_sqm: Option<i32>,
    pub location: Option<String>,
    pub features: Option<FeatureTemplateDto>,
    pub publish: Option<bool>,
}

impl PropertyCommandService {
    pub async fn update_property(
        &self,
        command: UpdatePropertyCommand,
    ) -> ApplicationResult<PropertyDto> {
        let id = PropertyId::new(command.id)?;
        let mut property = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;

        let mut update = PropertyUpdate::new(id, property.updated_at);
        let now = self.clock.now();

        if let Some(title) = command.title {
            let title = PropertyTitle::new(title)?;
            // A retitled listing gets a fresh slug; its own record is
            // excluded from the collision check.
            let slug = self
                .slug_service
                .generate(SlugKind::Property, title.as_str(), Some(id.into()))
                .await?;
            property.set_slug(slug.clone(), now);
            update.title = Some(title);
            update.slug = Some(slug);
        }

        if let Some(description) = command.description {
            update.description = Some(description);
        }
        if let Some(property_type) = command.property_type {
            update.property_type = Some(property_type.parse::<PropertyType>()?);
        }
        if let Some(offer) = command.offer {
            update.offer = Some(offer.parse::<OfferKind>()?);
        }
        if let Some(price) = command.price {
            update.price = Some(Price::new(price)?);
        }
        if let Some(bedrooms) = command.bedrooms {
            update.bedrooms = Some(bedrooms);
        }
        if let Some(bathrooms) = command.bathrooms {
            update.bathrooms = Some(bathrooms);
        }
        if let Some(area_sqm) = command.area_sqm {
            update.area_sqm = Some(area_sqm);
        }
        if let Some(location) = command.location {
            update.location = Some(location);
        }
        if let Some(features) = command.features {
            let features: FeatureTemplate = features.into();
            features.validate()?;
            update.features = Some(features);
        }

        if let Some(publish) = command.publish {
            Self::apply_publish_flag(&mut property, publish, &mut update, now);
        }

        if update.is_noop() {
            return Ok(property.into());
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    fn apply_publish_flag(
        property: &mut Property,
        publish: bool,
        update: &mut PropertyUpdate,
        now: chrono::DateTime<chrono::Utc>,
    ) {
        if publish == property.published {
            return;
        }
        if publish {
            property.publish(now);
        } else {
            property.unpublish(now);
        }
        update.publish_state = Some(crate::domain::property::PublishStateUpdate {
            published: property.published,
            published_at: property.published_at,
        });
    }
}

// src/application/commands/properties/publish.rs
use super::PropertyCommandService;
use crate::{
    application::{
        dto::PropertyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::property::{PropertyId, PropertyUpdate, PublishStateUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl PropertyCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PropertyDto> {
        let id = PropertyId::new(command.id)?;
        let mut property = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;

        if command.publish == property.published {
            return Ok(property.into());
        }

        let now = self.clock.now();
        let mut update = PropertyUpdate::new(id, property.updated_at);
        if command.publish {
            property.publish(now);
        } else {
            property.unpublish(now);
        }
        update.publish_state = Some(PublishStateUpdate {
            published: property.published,
            published_at: property.published_at,
        });
        update.set_updated_at(now);

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}

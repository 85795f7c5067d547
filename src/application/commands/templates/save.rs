// src/application/commands/templates/save.rs
use super::TemplateCommandService;
use crate::{
    application::{
        dto::templates::{FeatureTemplateDto, SavedTemplateDto},
        error::ApplicationResult,
    },
    domain::template::{FeatureTemplate, NewSavedTemplate, TemplateName},
};

pub struct SaveTemplateCommand {
    pub name: String,
    pub features: FeatureTemplateDto,
}

impl TemplateCommandService {
    pub async fn save_template(
        &self,
        command: SaveTemplateCommand,
    ) -> ApplicationResult<SavedTemplateDto> {
        let name = TemplateName::new(command.name)?;
        let features: FeatureTemplate = command.features.into();
        features.validate()?;

        let now = self.clock.now();
        let saved = self
            .template_repo
            .insert(NewSavedTemplate {
                name,
                features,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(saved.into())
    }
}

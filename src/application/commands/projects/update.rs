// src/application/commands/projects/update.rs
use super::ProjectCommandService;
use crate::{
    application::{
        dto::ProjectDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        project::{ProjectId, ProjectName, ProjectUpdate},
        slug::SlugKind,
    },
};

pub struct UpdateProjectCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub developer: Option<String>,
    /// `Some(None)` clears the year, `None` leaves it untouched.
    pub completion_year: Option<Option<i16>>,
    pub publish: Option<bool>,
}

impl ProjectCommandService {
    pub async fn update_project(
        &self,
        command: UpdateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let id = ProjectId::new(command.id)?;
        let project = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("project not found"))?;

        let now = self.clock.now();
        let mut update = ProjectUpdate::new(id, project.updated_at);

        if let Some(name) = command.name {
            let name = ProjectName::new(name)?;
            let slug = self
                .slug_service
                .generate(SlugKind::Project, name.as_str(), Some(id.into()))
                .await?;
            update.name = Some(name);
            update.slug = Some(slug);
        }
        if let Some(description) = command.description {
            update.description = Some(description);
        }
        if let Some(location) = command.location {
            update.location = Some(location);
        }
        if let Some(developer) = command.developer {
            update.developer = Some(developer);
        }
        if let Some(completion_year) = command.completion_year {
            update.completion_year = Some(completion_year);
        }
        if let Some(publish) = command.publish {
            update.published = Some(publish);
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}

// src/application/commands/projects/create.rs
use super::ProjectCommandService;
use crate::{
    application::{dto::ProjectDto, error::ApplicationResult},
    domain::{
        project::{NewProject, ProjectName},
        slug::SlugKind,
    },
};

pub struct CreateProjectCommand {
    pub name: String,
    pub description: String,
    pub location: String,
    pub developer: String,
    pub completion_year: Option<i16>,
    pub publish: bool,
}

impl ProjectCommandService {
    pub async fn create_project(
        &self,
        command: CreateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let name = ProjectName::new(command.name)?;
        let now = self.clock.now();

        let slug = self
            .slug_service
            .generate(SlugKind::Project, name.as_str(), None)
            .await?;

        let new_project = NewProject {
            name,
            slug,
            description: command.description,
            location: command.location,
            developer: command.developer,
            completion_year: command.completion_year,
            published: command.publish,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_project).await?;
        Ok(created.into())
    }
}

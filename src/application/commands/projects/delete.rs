// src/application/commands/projects/delete.rs
use super::ProjectCommandService;
use crate::{application::error::ApplicationResult, domain::project::ProjectId};

pub struct DeleteProjectCommand {
    pub id: i64,
}

impl ProjectCommandService {
    pub async fn delete_project(&self, command: DeleteProjectCommand) -> ApplicationResult<()> {
        let id = ProjectId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}

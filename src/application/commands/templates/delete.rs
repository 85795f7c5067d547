// src/application/commands/templates/delete.rs
use super::TemplateCommandService;
use crate::{application::error::ApplicationResult, domain::template::TemplateId};

pub struct DeleteTemplateCommand {
    pub id: i64,
}

impl TemplateCommandService {
    pub async fn delete_template(&self, command: DeleteTemplateCommand) -> ApplicationResult<()> {
        let id = TemplateId::new(command.id)?;
        self.template_repo.delete(id).await?;
        Ok(())
    }
}

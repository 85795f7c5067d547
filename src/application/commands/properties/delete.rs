// src/application/commands/properties/delete.rs
use super::PropertyCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::property::PropertyId,
};

pub struct DeletePropertyCommand {
    pub id: i64,
}

impl PropertyCommandService {
    pub async fn delete_property(&self, command: DeletePropertyCommand) -> ApplicationResult<()> {
        let id = PropertyId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}

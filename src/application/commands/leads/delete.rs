// src/application/commands/leads/delete.rs
use super::LeadCommandService;
use crate::{application::error::ApplicationResult, domain::lead::LeadId};

pub struct DeleteLeadCommand {
    pub id: i64,
}

impl LeadCommandService {
    pub async fn delete_lead(&self, command: DeleteLeadCommand) -> ApplicationResult<()> {
        let id = LeadId::new(command.id)?;
        self.lead_repo.delete(id).await?;
        Ok(())
    }
}

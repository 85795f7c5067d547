// src/application/commands/leads/update_status.rs
use super::LeadCommandService;
use crate::{
    application::{dto::LeadDto, error::ApplicationResult},
    domain::lead::{LeadId, LeadStatus},
};

pub struct UpdateLeadStatusCommand {
    pub id: i64,
    pub status: String,
}

impl LeadCommandService {
    pub async fn update_lead_status(
        &self,
        command: UpdateLeadStatusCommand,
    ) -> ApplicationResult<LeadDto> {
        let id = LeadId::new(command.id)?;
        let status: LeadStatus = command.status.parse()?;
        let now = self.clock.now();
        let lead = self.lead_repo.set_status(id, status, now).await?;
        Ok(lead.into())
    }
}

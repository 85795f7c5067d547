// src/application/commands/leads/submit.rs
use super::LeadCommandService;
use crate::{
    application::{
        dto::LeadDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        lead::{Email, LeadStatus, NewLead},
        locale::Locale,
        property::PropertyId,
    },
};

/// Public contact-form submission. The only unauthenticated write in the API.
pub struct SubmitLeadCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub locale: Locale,
    pub property_id: Option<i64>,
}

impl LeadCommandService {
    pub async fn submit_lead(&self, command: SubmitLeadCommand) -> ApplicationResult<LeadDto> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::validation("name cannot be empty"));
        }
        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("message cannot be empty"));
        }
        let email = Email::new(command.email)?;

        let property_id = match command.property_id {
            Some(raw) => {
                let id = PropertyId::new(raw)?;
                let property = self
                    .property_repo
                    .find_by_id(id)
                    .await?
                    .filter(|property| property.published)
                    .ok_or_else(|| ApplicationError::validation("unknown property reference"))?;
                Some(property.id)
            }
            None => None,
        };

        let now = self.clock.now();
        let lead = self
            .lead_repo
            .insert(NewLead {
                name: command.name.trim().to_string(),
                email,
                phone: command.phone.filter(|phone| !phone.trim().is_empty()),
                message: command.message,
                locale: command.locale,
                property_id,
                status: LeadStatus::New,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(lead_id = i64::from(lead.id), locale = %lead.locale, "lead received");
        Ok(lead.into())
    }
}

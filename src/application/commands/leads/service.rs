// src/application/commands/leads/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{lead::LeadRepository, property::PropertyReadRepository},
};

pub struct LeadCommandService {
    pub(super) lead_repo: Arc<dyn LeadRepository>,
    pub(super) property_repo: Arc<dyn PropertyReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl LeadCommandService {
    pub fn new(
        lead_repo: Arc<dyn LeadRepository>,
        property_repo: Arc<dyn PropertyReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lead_repo,
            property_repo,
            clock,
        }
    }
}

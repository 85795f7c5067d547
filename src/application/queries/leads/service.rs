// src/application/queries/leads/service.rs
use std::sync::Arc;

use crate::domain::lead::LeadRepository;

pub struct LeadQueryService {
    pub(super) lead_repo: Arc<dyn LeadRepository>,
}

impl LeadQueryService {
    pub fn new(lead_repo: Arc<dyn LeadRepository>) -> Self {
        Self { lead_repo }
    }
}

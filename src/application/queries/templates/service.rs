// src/application/queries/templates/service.rs
use std::sync::Arc;

use crate::domain::template::TemplateRepository;

pub struct TemplateQueryService {
    pub(super) template_repo: Arc<dyn TemplateRepository>,
}

impl TemplateQueryService {
    pub fn new(template_repo: Arc<dyn TemplateRepository>) -> Self {
        Self { template_repo }
    }
}

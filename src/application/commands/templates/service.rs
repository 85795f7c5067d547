// src/application/commands/templates/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::template::TemplateRepository};

pub struct TemplateCommandService {
    pub(super) template_repo: Arc<dyn TemplateRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TemplateCommandService {
    pub fn new(template_repo: Arc<dyn TemplateRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            template_repo,
            clock,
        }
    }
}

// src/application/commands/projects/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        project::{ProjectReadRepository, ProjectWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct ProjectCommandService {
    pub(super) write_repo: Arc<dyn ProjectWriteRepository>,
    pub(super) read_repo: Arc<dyn ProjectReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProjectCommandService {
    pub fn new(
        write_repo: Arc<dyn ProjectWriteRepository>,
        read_repo: Arc<dyn ProjectReadRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}

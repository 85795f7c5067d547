// src/application/commands/properties/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        property::{PropertyReadRepository, PropertyWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct PropertyCommandService {
    pub(super) write_repo: Arc<dyn PropertyWriteRepository>,
    pub(super) read_repo: Arc<dyn PropertyReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PropertyCommandService {
    pub fn new(
        write_repo: Arc<dyn PropertyWriteRepository>,
        read_repo: Arc<dyn PropertyReadRepository>,
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

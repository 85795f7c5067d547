// src/application/queries/projects/service.rs
use std::sync::Arc;

use crate::domain::project::ProjectReadRepository;

pub struct ProjectQueryService {
    pub(super) read_repo: Arc<dyn ProjectReadRepository>,
}

impl ProjectQueryService {
    pub fn new(read_repo: Arc<dyn ProjectReadRepository>) -> Self {
        Self { read_repo }
    }
}

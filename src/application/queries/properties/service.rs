// src/application/queries/properties/service.rs
use std::sync::Arc;

use crate::domain::property::PropertyReadRepository;

pub struct PropertyQueryService {
    pub(super) read_repo: Arc<dyn PropertyReadRepository>,
}

impl PropertyQueryService {
    pub fn new(read_repo: Arc<dyn PropertyReadRepository>) -> Self {
        Self { read_repo }
    }
}

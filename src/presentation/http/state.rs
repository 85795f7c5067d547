// src/presentation/http/state.rs
use crate::application::{ports::security::AdminTokenValidator, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub admin_tokens: Arc<dyn AdminTokenValidator>,
}

// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use std::sync::Arc;

use axum::Router;

use baan_core::application::ports::{
    security::AdminTokenValidator, time::Clock, util::SlugGenerator,
};
use baan_core::application::services::ApplicationServices;
use baan_core::domain::{
    lead::LeadRepository,
    project::{ProjectReadRepository, ProjectWriteRepository},
    property::{PropertyReadRepository, PropertyWriteRepository},
    slug::SlugLookup,
    template::TemplateRepository,
};
use baan_core::infrastructure::{
    security::Sha256TokenValidator, util::DefaultSlugGenerator,
};
use baan_core::presentation::http::{routes::build_router, state::HttpState};

use mocks::{
    InMemoryLeads, InMemoryProjects, InMemoryProperties, InMemorySlugLookup, InMemoryTemplates,
    TickingClock,
};

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub properties: Arc<InMemoryProperties>,
    pub projects: Arc<InMemoryProjects>,
    pub leads: Arc<InMemoryLeads>,
    pub templates: Arc<InMemoryTemplates>,
}

pub fn harness() -> TestHarness {
    let properties = Arc::new(InMemoryProperties::new());
    let projects = Arc::new(InMemoryProjects::new());
    let leads = Arc::new(InMemoryLeads::new());
    let templates = Arc::new(InMemoryTemplates::new());
    let slug_lookup: Arc<dyn SlugLookup> = Arc::new(InMemorySlugLookup::new(
        properties.store(),
        projects.store(),
    ));

    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(TickingClock::new());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&properties) as Arc<dyn PropertyWriteRepository>,
        Arc::clone(&properties) as Arc<dyn PropertyReadRepository>,
        Arc::clone(&projects) as Arc<dyn ProjectWriteRepository>,
        Arc::clone(&projects) as Arc<dyn ProjectReadRepository>,
        Arc::clone(&leads) as Arc<dyn LeadRepository>,
        Arc::clone(&templates) as Arc<dyn TemplateRepository>,
        slug_lookup,
        slugger,
        clock,
    ));

    TestHarness {
        services,
        properties,
        projects,
        leads,
        templates,
    }
}

pub fn make_test_router() -> Router {
    let harness = harness();
    let admin_tokens: Arc<dyn AdminTokenValidator> =
        Arc::new(Sha256TokenValidator::new(TEST_ADMIN_TOKEN));

    build_router(
        HttpState {
            services: harness.services,
            admin_tokens,
        },
        &["*".to_string()],
    )
}

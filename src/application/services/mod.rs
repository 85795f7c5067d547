// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            leads::LeadCommandService, projects::ProjectCommandService,
            properties::PropertyCommandService, templates::TemplateCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            leads::LeadQueryService, projects::ProjectQueryService,
            properties::PropertyQueryService, templates::TemplateQueryService,
        },
    },
    domain::{
        lead::LeadRepository,
        project::{ProjectReadRepository, ProjectWriteRepository},
        property::{PropertyReadRepository, PropertyWriteRepository},
        slug::{SlugLookup, UniqueSlugService},
        template::TemplateRepository,
    },
};

pub struct ApplicationServices {
    pub property_commands: Arc<PropertyCommandService>,
    pub property_queries: Arc<PropertyQueryService>,
    pub project_commands: Arc<ProjectCommandService>,
    pub project_queries: Arc<ProjectQueryService>,
    pub lead_commands: Arc<LeadCommandService>,
    pub lead_queries: Arc<LeadQueryService>,
    pub template_commands: Arc<TemplateCommandService>,
    pub template_queries: Arc<TemplateQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        property_write_repo: Arc<dyn PropertyWriteRepository>,
        property_read_repo: Arc<dyn PropertyReadRepository>,
        project_write_repo: Arc<dyn ProjectWriteRepository>,
        project_read_repo: Arc<dyn ProjectReadRepository>,
        lead_repo: Arc<dyn LeadRepository>,
        template_repo: Arc<dyn TemplateRepository>,
        slug_lookup: Arc<dyn SlugLookup>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // One slug service spans both namespaces; the kind argument keeps
        // property and project slugs from colliding with each other.
        let slug_service = Arc::new(UniqueSlugService::new(slug_lookup, slugger));

        let property_commands = Arc::new(PropertyCommandService::new(
            Arc::clone(&property_write_repo),
            Arc::clone(&property_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let property_queries = Arc::new(PropertyQueryService::new(Arc::clone(&property_read_repo)));

        let project_commands = Arc::new(ProjectCommandService::new(
            Arc::clone(&project_write_repo),
            Arc::clone(&project_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let project_queries = Arc::new(ProjectQueryService::new(Arc::clone(&project_read_repo)));

        let lead_commands = Arc::new(LeadCommandService::new(
            Arc::clone(&lead_repo),
            Arc::clone(&property_read_repo),
            Arc::clone(&clock),
        ));
        let lead_queries = Arc::new(LeadQueryService::new(Arc::clone(&lead_repo)));

        let template_commands = Arc::new(TemplateCommandService::new(
            Arc::clone(&template_repo),
            Arc::clone(&clock),
        ));
        let template_queries = Arc::new(TemplateQueryService::new(Arc::clone(&template_repo)));

        Self {
            property_commands,
            property_queries,
            project_commands,
            project_queries,
            lead_commands,
            lead_queries,
            template_commands,
            template_queries,
        }
    }
}

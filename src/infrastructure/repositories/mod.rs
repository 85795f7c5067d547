// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_lead;
mod postgres_project;
mod postgres_property;
mod postgres_slugs;
mod postgres_template;

pub(crate) use error::map_sqlx;
pub use postgres_lead::PostgresLeadRepository;
pub use postgres_project::{PostgresProjectReadRepository, PostgresProjectWriteRepository};
pub use postgres_property::{PostgresPropertyReadRepository, PostgresPropertyWriteRepository};
pub use postgres_slugs::PostgresSlugLookup;
pub use postgres_template::PostgresTemplateRepository;

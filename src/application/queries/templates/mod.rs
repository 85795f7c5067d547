// src/application/queries/templates/mod.rs
mod autofill;
mod list;
mod service;

pub use autofill::AutoFillQuery;
pub use list::ListTemplatesQuery;
pub use service::TemplateQueryService;

pub mod leads;
pub mod pagination;
pub mod projects;
pub mod properties;
pub mod templates;

pub use leads::LeadDto;
pub use pagination::CursorPage;
pub use projects::ProjectDto;
pub use properties::PropertyDto;
pub use templates::{FeatureTemplateDto, SavedTemplateDto};

// src/domain/template/features.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::template::vocabulary;

/// A bundle of feature selections across the four listing categories.
/// Order matters (it is how the form renders them); repeated labels are
/// allowed because the auto-fill rules append cumulatively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTemplate {
    pub communal_facilities: Vec<String>,
    pub security: Vec<String>,
    pub technical_equipment: Vec<String>,
    pub location_features: Vec<String>,
}

impl FeatureTemplate {
    pub fn is_empty(&self) -> bool {
        self.communal_facilities.is_empty()
            && self.security.is_empty()
            && self.technical_equipment.is_empty()
            && self.location_features.is_empty()
    }

    /// Every label must come from its category's controlled vocabulary.
    pub fn validate(&self) -> DomainResult<()> {
        Self::check(vocabulary::COMMUNAL_FACILITIES, &self.communal_facilities)?;
        Self::check(vocabulary::SECURITY, &self.security)?;
        Self::check(vocabulary::TECHNICAL_EQUIPMENT, &self.technical_equipment)?;
        Self::check(vocabulary::LOCATION_FEATURES, &self.location_features)?;
        Ok(())
    }

    fn check(permitted: &[&str], labels: &[String]) -> DomainResult<()> {
        for label in labels {
            if !vocabulary::is_permitted(permitted, label) {
                return Err(DomainError::Validation(format!(
                    "feature label not in vocabulary: {label}"
                )));
            }
        }
        Ok(())
    }
}

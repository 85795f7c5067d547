// src/domain/template/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::template::features::FeatureTemplate;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub i64);

impl TemplateId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "template id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TemplateId> for i64 {
    fn from(value: TemplateId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "template name cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TemplateName> for String {
    fn from(value: TemplateName) -> Self {
        value.0
    }
}

/// An admin-saved feature bundle, reusable across listing forms.
#[derive(Debug, Clone)]
pub struct SavedTemplate {
    pub id: TemplateId,
    pub name: TemplateName,
    pub features: FeatureTemplate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSavedTemplate {
    pub name: TemplateName,
    pub features: FeatureTemplate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

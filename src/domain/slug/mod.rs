// src/domain/slug/mod.rs
mod service;

pub use service::{MAX_SLUG_ATTEMPTS, UniqueSlugService};

use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// URL-safe identifier derived from a title: lowercase ASCII alphanumerics
/// separated by single hyphens, never empty, never hyphen-terminated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed
            || value.starts_with('-')
            || value.ends_with('-')
            || value.contains("--")
        {
            return Err(DomainError::Validation(format!(
                "malformed slug: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Namespace a slug is unique within. Properties and projects each hold
/// their own collection; the same slug may exist once in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugKind {
    Property,
    Project,
}

impl SlugKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for SlugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the slug namespaces, answered by the persistence layer.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Id of the entity currently holding `slug` within `kind`, if any.
    async fn slug_owner(&self, kind: SlugKind, slug: &Slug) -> DomainResult<Option<i64>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        for ok in ["beach-condo", "a", "2-bedroom-apartment-jomtien", "x9"] {
            assert!(Slug::new(ok).is_ok(), "rejected {ok}");
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for bad in ["", "Beach", "beach--condo", "-beach", "beach-", "beach condo", "béach"] {
            assert!(Slug::new(bad).is_err(), "accepted {bad:?}");
        }
    }
}

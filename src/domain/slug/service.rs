// src/domain/slug/service.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugKind, SlugLookup};

/// Upper bound on suffix probing. Exceeding it means the namespace around a
/// base slug is pathologically dense and the caller should surface an error
/// instead of spinning.
pub const MAX_SLUG_ATTEMPTS: u32 = 200;

/// Domain service producing slugs that are unique within their kind.
///
/// The storage-level unique index stays authoritative: two racing calls can
/// both observe a free candidate, in which case the insert loses with a
/// conflict and the caller re-runs generation.
pub struct UniqueSlugService {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { lookup, generator }
    }

    /// Derive a unique slug for `text` within `kind`. An entity updating
    /// itself passes its own id as `exclude` so its current slug is not
    /// counted as a collision.
    pub async fn generate(
        &self,
        kind: SlugKind,
        text: &str,
        exclude: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(text);
        let base = if base.is_empty() {
            // Titles with no sluggable characters fall back to a
            // timestamped identifier rather than an empty namespace entry.
            format!("{}-{}", kind.as_str(), Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 2u32;

        for _ in 0..MAX_SLUG_ATTEMPTS {
            let slug = Slug::new(candidate)?;
            match self.lookup.slug_owner(kind, &slug).await? {
                None => return Ok(slug),
                Some(owner) if exclude == Some(owner) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
            }
        }

        Err(DomainError::SlugExhausted(MAX_SLUG_ATTEMPTS))
    }
}

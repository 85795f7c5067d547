// src/infrastructure/repositories/postgres_slugs.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugKind, SlugLookup};
use async_trait::async_trait;
use sqlx::PgPool;

/// Answers slug-collision probes for both namespaces against their tables.
#[derive(Clone)]
pub struct PostgresSlugLookup {
    pool: PgPool,
}

impl PostgresSlugLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugLookup for PostgresSlugLookup {
    async fn slug_owner(&self, kind: SlugKind, slug: &Slug) -> DomainResult<Option<i64>> {
        let sql = match kind {
            SlugKind::Property => "SELECT id FROM properties WHERE slug = $1",
            SlugKind::Project => "SELECT id FROM projects WHERE slug = $1",
        };

        let id = sqlx::query_scalar::<_, i64>(sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(id)
    }
}

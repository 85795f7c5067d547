// src/infrastructure/repositories/postgres_template.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::template::{
    FeatureTemplate, NewSavedTemplate, SavedTemplate, TemplateId, TemplateName, TemplateRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const TEMPLATE_COLUMNS: &str = "id, name, communal_facilities, security, technical_equipment, \
     location_features, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TemplateRow {
    id: i64,
    name: String,
    communal_facilities: Vec<String>,
    security: Vec<String>,
    technical_equipment: Vec<String>,
    location_features: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TemplateRow> for SavedTemplate {
    type Error = DomainError;

    fn try_from(row: TemplateRow) -> Result<Self, Self::Error> {
        Ok(SavedTemplate {
            id: TemplateId::new(row.id)?,
            name: TemplateName::new(row.name)?,
            features: FeatureTemplate {
                communal_facilities: row.communal_facilities,
                security: row.security,
                technical_equipment: row.technical_equipment,
                location_features: row.location_features,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn insert(&self, template: NewSavedTemplate) -> DomainResult<SavedTemplate> {
        let NewSavedTemplate {
            name,
            features,
            created_at,
            updated_at,
        } = template;

        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            "INSERT INTO templates (name, communal_facilities, security, technical_equipment, \
             location_features, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {TEMPLATE_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(&features.communal_facilities)
        .bind(&features.security)
        .bind(&features.technical_equipment)
        .bind(&features.location_features)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        SavedTemplate::try_from(row)
    }

    async fn find_by_id(&self, id: TemplateId) -> DomainResult<Option<SavedTemplate>> {
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SavedTemplate::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<SavedTemplate>> {
        let rows = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SavedTemplate::try_from).collect()
    }

    async fn delete(&self, id: TemplateId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("template not found".into()));
        }
        Ok(())
    }
}

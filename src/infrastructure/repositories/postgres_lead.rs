// src/infrastructure/repositories/postgres_lead.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{Email, Lead, LeadId, LeadRepository, LeadStatus, NewLead};
use crate::domain::locale::Locale;
use crate::domain::pagination::ListCursor;
use crate::domain::property::PropertyId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LEAD_COLUMNS: &str =
    "id, name, email, phone, message, locale, property_id, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LeadRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    locale: String,
    property_id: Option<i64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = DomainError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        Ok(Lead {
            id: LeadId::new(row.id)?,
            name: row.name,
            email: Email::new(row.email)?,
            phone: row.phone,
            message: row.message,
            locale: row.locale.parse::<Locale>()?,
            property_id: row.property_id.map(PropertyId::new).transpose()?,
            status: row.status.parse::<LeadStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let NewLead {
            name,
            email,
            phone,
            message,
            locale,
            property_id,
            status,
            created_at,
            updated_at,
        } = lead;

        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "INSERT INTO leads (name, email, phone, message, locale, property_id, status, \
             created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {LEAD_COLUMNS}"
        ))
        .bind(&name)
        .bind(email.as_str())
        .bind(&phone)
        .bind(&message)
        .bind(locale.as_str())
        .bind(property_id.map(i64::from))
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Lead::try_from(row)
    }

    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>> {
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Lead::try_from).transpose()
    }

    async fn list_page(
        &self,
        status: Option<LeadStatus>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Lead>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {LEAD_COLUMNS} FROM leads WHERE TRUE"));
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(cursor) = cursor.as_ref() {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<LeadRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut leads = rows
            .into_iter()
            .map(Lead::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if leads.len() > limit as usize {
            leads.pop();
            if let Some(last) = leads.last() {
                next_cursor = Some(ListCursor::new(last.created_at, last.id.into()));
            }
        }

        Ok((leads, next_cursor))
    }

    async fn set_status(
        &self,
        id: LeadId,
        status: LeadStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Lead> {
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "UPDATE leads SET status = $1, updated_at = $2 WHERE id = $3 RETURNING {LEAD_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("lead not found".into()))?;

        Lead::try_from(row)
    }

    async fn delete(&self, id: LeadId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("lead not found".into()));
        }
        Ok(())
    }
}

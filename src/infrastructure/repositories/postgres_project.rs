// src/infrastructure/repositories/postgres_project.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::ListCursor;
use crate::domain::project::{
    NewProject, Project, ProjectId, ProjectName, ProjectReadRepository, ProjectUpdate,
    ProjectWriteRepository,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PROJECT_COLUMNS: &str = "id, name, slug, description, location, developer, \
     completion_year, published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProjectWriteRepository {
    pool: PgPool,
}

impl PostgresProjectWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProjectReadRepository {
    pool: PgPool,
}

impl PostgresProjectReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    location: String,
    developer: String,
    completion_year: Option<i16>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DomainError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId::new(row.id)?,
            name: ProjectName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            location: row.location,
            developer: row.developer,
            completion_year: row.completion_year,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProjectWriteRepository for PostgresProjectWriteRepository {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        let NewProject {
            name,
            slug,
            description,
            location,
            developer,
            completion_year,
            published,
            created_at,
            updated_at,
        } = project;

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "INSERT INTO projects (name, slug, description, location, developer, \
             completion_year, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(&description)
        .bind(&location)
        .bind(&developer)
        .bind(completion_year)
        .bind(published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Project::try_from(row)
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let ProjectUpdate {
            id,
            name,
            slug,
            description,
            location,
            developer,
            completion_year,
            published,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE projects SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(location) = location {
            builder.push(", location = ");
            builder.push_bind(location);
        }
        if let Some(developer) = developer {
            builder.push(", developer = ");
            builder.push_bind(developer);
        }
        if let Some(completion_year) = completion_year {
            builder.push(", completion_year = ");
            builder.push_bind(completion_year);
        }
        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(format!(" RETURNING {PROJECT_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ProjectRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("project update conflict, please retry".into()))?;

        Project::try_from(row)
    }

    async fn delete(&self, id: ProjectId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("project not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectReadRepository for PostgresProjectReadRepository {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Project::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Project::try_from).transpose()
    }

    async fn list_page(
        &self,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Project>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE TRUE"));
        if !include_drafts {
            builder.push(" AND published = TRUE");
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
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut projects = rows
            .into_iter()
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if projects.len() > limit as usize {
            projects.pop();
            if let Some(last) = projects.last() {
                next_cursor = Some(ListCursor::new(last.created_at, last.id.into()));
            }
        }

        Ok((projects, next_cursor))
    }
}

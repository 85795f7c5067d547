// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_PROPERTY_SLUG: &str = "properties_slug_key";
const CNT_PROJECT_SLUG: &str = "projects_slug_key";
const CNT_TEMPLATE_NAME: &str = "templates_name_key";
const CNT_LEAD_PROPERTY: &str = "leads_property_id_fkey";
const CNT_PROPERTY_PUBLISHED_CHECK: &str = "properties_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PROPERTY_SLUG | CNT_PROJECT_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_TEMPLATE_NAME => {
                        DomainError::Conflict("template name already exists".into())
                    }
                    CNT_LEAD_PROPERTY => DomainError::NotFound("property not found".into()),
                    CNT_PROPERTY_PUBLISHED_CHECK => DomainError::Validation(
                        "published listings require published_at".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

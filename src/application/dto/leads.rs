// src/application/dto/leads.rs
use crate::domain::lead::Lead;
use crate::domain::locale::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[schema(value_type = String, example = "en")]
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Lead> for LeadDto {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.into(),
            name: lead.name,
            email: lead.email.into(),
            phone: lead.phone,
            message: lead.message,
            locale: lead.locale,
            property_id: lead.property_id.map(Into::into),
            status: lead.status.as_str().to_string(),
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

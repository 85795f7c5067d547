// src/application/dto/templates.rs
use crate::domain::template::{FeatureTemplate, SavedTemplate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FeatureTemplateDto {
    #[serde(default)]
    pub communal_facilities: Vec<String>,
    #[serde(default)]
    pub security: Vec<String>,
    #[serde(default)]
    pub technical_equipment: Vec<String>,
    #[serde(default)]
    pub location_features: Vec<String>,
}

impl From<FeatureTemplate> for FeatureTemplateDto {
    fn from(features: FeatureTemplate) -> Self {
        Self {
            communal_facilities: features.communal_facilities,
            security: features.security,
            technical_equipment: features.technical_equipment,
            location_features: features.location_features,
        }
    }
}

impl From<FeatureTemplateDto> for FeatureTemplate {
    fn from(dto: FeatureTemplateDto) -> Self {
        Self {
            communal_facilities: dto.communal_facilities,
            security: dto.security,
            technical_equipment: dto.technical_equipment,
            location_features: dto.location_features,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavedTemplateDto {
    pub id: i64,
    pub name: String,
    pub features: FeatureTemplateDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SavedTemplate> for SavedTemplateDto {
    fn from(template: SavedTemplate) -> Self {
        Self {
            id: template.id.into(),
            name: template.name.into(),
            features: template.features.into(),
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

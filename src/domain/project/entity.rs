// src/domain/project/entity.rs
use crate::domain::project::value_objects::{ProjectId, ProjectName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// A development the agency markets (a condominium tower, a villa estate).
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub slug: Slug,
    pub description: String,
    pub location: String,
    pub developer: String,
    pub completion_year: Option<i16>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.published = published;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: ProjectName,
    pub slug: Slug,
    pub description: String,
    pub location: String,
    pub developer: String,
    pub completion_year: Option<i16>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub id: ProjectId,
    pub name: Option<ProjectName>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub developer: Option<String>,
    pub completion_year: Option<Option<i16>>,
    pub published: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectUpdate {
    pub fn new(id: ProjectId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            location: None,
            developer: None,
            completion_year: None,
            published: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::value_objects::{ProjectId, ProjectName};
    use crate::domain::slug::Slug;
    use chrono::Utc;

    fn sample_project() -> Project {
        Project {
            id: ProjectId::new(1).unwrap(),
            name: ProjectName::new("Ocean Horizon").unwrap(),
            slug: Slug::new("ocean-horizon").unwrap(),
            description: "Beachfront tower".into(),
            location: "Jomtien".into(),
            developer: "Horizon Estates".into(),
            completion_year: Some(2027),
            published: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_published_stamps_updated_at() {
        let mut project = sample_project();
        let now = Utc::now();
        project.set_published(true, now);
        assert!(project.published);
        assert_eq!(project.updated_at, now);
    }

    #[test]
    fn set_slug_replaces_and_stamps() {
        let mut project = sample_project();
        let now = Utc::now();
        project.set_slug(Slug::new("ocean-horizon-2").unwrap(), now);
        assert_eq!(project.slug.as_str(), "ocean-horizon-2");
        assert_eq!(project.updated_at, now);
    }
}

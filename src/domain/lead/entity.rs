// src/domain/lead/entity.rs
use crate::domain::lead::value_objects::{Email, LeadId, LeadStatus};
use crate::domain::locale::Locale;
use crate::domain::property::PropertyId;
use chrono::{DateTime, Utc};

/// A contact-form submission, optionally tied to the listing it was sent from.
#[derive(Debug, Clone)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
    pub locale: Locale,
    pub property_id: Option<PropertyId>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    pub fn set_status(&mut self, status: LeadStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
    pub locale: Locale,
    pub property_id: Option<PropertyId>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_status_stamps_updated_at() {
        let now = Utc::now();
        let mut lead = Lead {
            id: LeadId::new(1).unwrap(),
            name: "Anna".into(),
            email: Email::new("anna@example.com").unwrap(),
            phone: None,
            message: "Is the condo still available?".into(),
            locale: Locale::En,
            property_id: None,
            status: LeadStatus::New,
            created_at: now,
            updated_at: now,
        };
        let later = now + chrono::Duration::minutes(1);
        lead.set_status(LeadStatus::Contacted, later);
        assert_eq!(lead.status, LeadStatus::Contacted);
        assert_eq!(lead.updated_at, later);
    }
}

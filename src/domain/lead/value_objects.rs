// src/domain/lead/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeadId(pub i64);

impl LeadId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("lead id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LeadId> for i64 {
    fn from(value: LeadId) -> Self {
        value.0
    }
}

/// Minimal shape check only; deliverability is the mail collaborator's
/// problem, not ours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
        if !valid {
            return Err(DomainError::Validation(format!(
                "malformed email address: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Back-office triage state for an incoming contact lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    New,
    Contacted,
    Closed,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "closed" => Ok(Self::Closed),
            other => Err(DomainError::Validation(format!(
                "unknown lead status: {other}"
            ))),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(Email::new(" buyer@example.com ").unwrap().as_str(), "buyer@example.com");
    }

    #[test]
    fn rejects_addresses_without_host_dot_or_local_part() {
        for bad in ["buyer", "@example.com", "buyer@localhost", ""] {
            assert!(Email::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Closed] {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
        assert!("spam".parse::<LeadStatus>().is_err());
    }
}

// src/domain/property/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(pub i64);

impl PropertyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "property id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PropertyId> for i64 {
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTitle(String);

impl PropertyTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PropertyTitle> for String {
    fn from(value: PropertyTitle) -> Self {
        value.0
    }
}

/// The kind of dwelling. Serialized lowercase everywhere (API, database).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Condo,
    House,
    Villa,
    Townhouse,
    Land,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Condo => "condo",
            Self::House => "house",
            Self::Villa => "villa",
            Self::Townhouse => "townhouse",
            Self::Land => "land",
        }
    }
}

impl FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value {
            "condo" => Ok(Self::Condo),
            "house" => Ok(Self::House),
            "villa" => Ok(Self::Villa),
            "townhouse" => Ok(Self::Townhouse),
            "land" => Ok(Self::Land),
            other => Err(DomainError::Validation(format!(
                "unknown property type: {other}"
            ))),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Sale,
    Rent,
}

impl OfferKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }
}

impl FromStr for OfferKind {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            other => Err(DomainError::Validation(format!(
                "unknown offer kind: {other}"
            ))),
        }
    }
}

impl fmt::Display for OfferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price in satang (minor currency unit). Rent prices are per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn new(satang: i64) -> DomainResult<Self> {
        if satang < 0 {
            Err(DomainError::Validation("price cannot be negative".into()))
        } else {
            Ok(Self(satang))
        }
    }

    pub fn satang(self) -> i64 {
        self.0
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

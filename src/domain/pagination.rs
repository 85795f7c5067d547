// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Opaque keyset cursor over `(created_at, id)`, shared by every listing.
/// Encoded as url-safe base64 so it survives query strings unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub created_at: DateTime<Utc>,
    pub id: i64,
}

impl ListCursor {
    pub fn new(created_at: DateTime<Utc>, id: i64) -> Self {
        Self { created_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(created_at, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let cursor = ListCursor::new(Utc::now(), 42);
        let decoded = ListCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded.id, cursor.id);
        assert_eq!(decoded.created_at, cursor.created_at);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(ListCursor::decode("not base64 !!").is_err());
        assert!(ListCursor::decode("bm8tcGlwZQ").is_err());
        assert!(ListCursor::decode("").is_err());
    }
}

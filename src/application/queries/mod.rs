// src/application/queries/mod.rs
pub mod leads;
pub mod projects;
pub mod properties;
pub mod templates;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{errors::DomainError, pagination::ListCursor};

pub(crate) const DEFAULT_LIMIT: u32 = 20;
pub(crate) const MAX_LIMIT: u32 = 100;

pub(crate) fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

pub(crate) fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ListCursor>> {
    match token {
        Some(value) => match ListCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_falls_back_to_default() {
        assert_eq!(normalize_limit(0), DEFAULT_LIMIT);
    }

    #[test]
    fn oversized_limit_is_clamped() {
        assert_eq!(normalize_limit(10_000), MAX_LIMIT);
        assert_eq!(normalize_limit(5), 5);
    }

    #[test]
    fn missing_cursor_is_none() {
        assert!(decode_cursor(None).unwrap().is_none());
    }

    #[test]
    fn bad_cursor_is_a_validation_error() {
        assert!(matches!(
            decode_cursor(Some("???")),
            Err(ApplicationError::Validation(_))
        ));
    }
}

// src/presentation/http/controllers/mod.rs
pub mod leads;
pub mod projects;
pub mod properties;
pub mod templates;

use crate::application::error::ApplicationError;
use crate::domain::locale::Locale;
use crate::presentation::http::error::{HttpError, HttpResult};

/// Public routes carry the locale as their first path segment; anything
/// outside the supported set is a missing page, not a bad request.
pub(crate) fn require_locale(raw: &str) -> HttpResult<Locale> {
    raw.parse::<Locale>().map_err(|_| {
        HttpError::from_error(ApplicationError::not_found(format!(
            "unsupported locale: {raw}"
        )))
    })
}

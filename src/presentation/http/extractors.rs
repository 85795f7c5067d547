// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

/// Like [`AdminSession`] but optional: public endpoints use it to widen
/// results (drafts) for the back office without requiring a token.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAdmin(pub bool);

fn state_of(parts: &Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_of(parts)?;
        let token = bearer_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })?;

        if state.admin_tokens.verify(&token) {
            Ok(Self)
        } else {
            Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )))
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_of(parts)?;
        let is_admin = bearer_token(parts)
            .map(|token| state.admin_tokens.verify(&token))
            .unwrap_or(false);
        Ok(Self(is_admin))
    }
}

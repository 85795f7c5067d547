// src/application/ports/security.rs

/// Verifies the bearer token presented on admin routes. The full identity
/// stack (sessions, roles) lives outside this service; this seam is all the
/// back office needs from it.
pub trait AdminTokenValidator: Send + Sync {
    fn verify(&self, presented: &str) -> bool;
}

// src/application/ports/util.rs

/// Normalizes free text into slug form. Uniqueness is layered on top by the
/// domain slug service; this port only owns the character transform.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

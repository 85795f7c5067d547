// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slug normalization backed by the `slug` crate: lowercases, transliterates,
/// maps separator runs to single hyphens and trims them from the ends.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

// src/domain/services.rs

/// Turns arbitrary text into a URL-safe slug fragment. Implementations
/// must be deterministic: the slug namespaces rely on equal input
/// producing equal output.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

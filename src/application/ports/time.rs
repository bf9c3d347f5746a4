use chrono::{DateTime, Utc};

/// Source of the current instant. Command services take this instead of
/// calling `Utc::now` so tests can pin timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

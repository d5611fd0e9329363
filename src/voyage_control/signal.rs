use strum_macros::Display;

/// Broadcast payload emitted after any operation that changes the set of
/// stored voyages, i.e. a confirmed create or delete. Listeners re-fetch on
/// reception; the payload itself carries no data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VoyagesChanged;

/// Severity of an operator-facing [`Notice`].
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short operator-facing message describing the outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: NoticeLevel::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: NoticeLevel::Error }
    }

    /// Canonical notice for a confirmed voyage creation.
    pub fn voyage_created() -> Self { Self::info("Voyage created successfully") }

    /// Canonical notice for a failed voyage creation.
    pub fn create_failed() -> Self { Self::error("Failed to create the voyage") }

    /// Canonical notice for a failed voyage deletion.
    pub fn delete_failed() -> Self { Self::error("Failed to delete the voyage") }

    pub fn message(&self) -> &str { self.message.as_str() }
    pub fn level(&self) -> NoticeLevel { self.level }
}

//! Core domain logic for IdeaBox.
//! This crate is the single source of truth for idea invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::idea::{
    parse_idea_kind, BasicIdea, Concept, Idea, IdeaField, IdeaId, IdeaKind, IdeaUpdate, NewIdea,
    ToDo, UnknownIdeaKind,
};
pub use notify::{LogNotificationService, NotificationService, NotifyError};
pub use repo::idea_repo::{IdeaRepository, InMemoryIdeaRepository};
pub use service::idea_service::{IdeaService, IdeaServiceError, IdeaServiceResult};
pub use service::shared::SharedIdeaService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

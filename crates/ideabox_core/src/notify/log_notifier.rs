//! Log-only notifier used by the CLI and as a default collaborator.

use crate::model::idea::Idea;
use crate::notify::{NotificationService, NotifyError};
use async_trait::async_trait;
use log::info;

/// Notifier that records one metadata-only log event per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationService;

impl LogNotificationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn notify(&self, idea: &Idea) -> Result<(), NotifyError> {
        // Titles and descriptions are user content; only ids and types are logged.
        info!(
            "event=idea_notify module=notify status=ok id={} type={}",
            idea.id(),
            idea.kind()
        );
        Ok(())
    }
}

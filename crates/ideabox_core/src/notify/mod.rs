//! Notification collaborator contract.
//!
//! # Responsibility
//! - Define the capability the idea service calls after notable updates.
//! - Keep delivery, retry and failure policy outside core.
//!
//! # Invariants
//! - A notifier only borrows the idea for the duration of one call.
//! - Core forwards notifier failures without rewriting them.

pub mod log_notifier;

use crate::model::idea::Idea;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use log_notifier::LogNotificationService;

/// Failure reported by a notification implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    message: String,
}

impl NotifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification failed: {}", self.message)
    }
}

impl Error for NotifyError {}

/// External capability invoked with the full updated idea.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, idea: &Idea) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: NotificationService + ?Sized> NotificationService for std::sync::Arc<T> {
    async fn notify(&self, idea: &Idea) -> Result<(), NotifyError> {
        (**self).notify(idea).await
    }
}

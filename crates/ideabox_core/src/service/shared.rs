//! Cloneable idea service handle for multiple callers.
//!
//! # Invariants
//! - All clones share one repository and one id counter.
//! - The lock is held across the notifier call, so other callers never see an
//!   update whose notification is still in flight.

use crate::model::idea::{Idea, IdeaId, IdeaKind, IdeaUpdate, NewIdea};
use crate::notify::NotificationService;
use crate::repo::idea_repo::{IdeaRepository, InMemoryIdeaRepository};
use crate::service::idea_service::{IdeaService, IdeaServiceResult};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mutex-guarded wrapper around [`IdeaService`].
pub struct SharedIdeaService<R: IdeaRepository, N: NotificationService> {
    inner: Arc<Mutex<IdeaService<R, N>>>,
}

impl<R: IdeaRepository, N: NotificationService> Clone for SharedIdeaService<R, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: NotificationService> SharedIdeaService<InMemoryIdeaRepository, N> {
    pub fn in_memory(notifier: N) -> Self {
        Self::new(IdeaService::in_memory(notifier))
    }
}

impl<R: IdeaRepository, N: NotificationService> SharedIdeaService<R, N> {
    pub fn new(service: IdeaService<R, N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    pub async fn create(&self, kind: IdeaKind, params: NewIdea) -> Idea {
        self.inner.lock().await.create(kind, params)
    }

    pub async fn create_tagged(&self, tag: &str, params: NewIdea) -> IdeaServiceResult<Idea> {
        self.inner.lock().await.create_tagged(tag, params)
    }

    pub async fn get_all_by_type(&self, kind: IdeaKind) -> Vec<Idea> {
        self.inner.lock().await.get_all_by_type(kind)
    }

    pub async fn get(&self, id: IdeaId) -> Option<Idea> {
        self.inner.lock().await.get(id)
    }

    pub async fn update(&self, id: IdeaId, update: IdeaUpdate) -> IdeaServiceResult<()> {
        let mut service = self.inner.lock().await;
        service.update(id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::SharedIdeaService;
    use crate::model::idea::{IdeaKind, IdeaUpdate, NewIdea};
    use crate::notify::LogNotificationService;

    #[tokio::test]
    async fn clones_share_one_id_sequence() {
        let service = SharedIdeaService::in_memory(LogNotificationService::new());
        let other = service.clone();

        let (first, second) = tokio::join!(
            service.create(IdeaKind::ToDo, NewIdea::new("a", "a")),
            other.create(IdeaKind::Concept, NewIdea::new("b", "b")),
        );
        let mut ids = vec![first.id(), second.id()];
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);

        other
            .update(first.id(), IdeaUpdate::default().done(true))
            .await
            .expect("update through clone should succeed");
        let stored = service.get(first.id()).await.expect("idea should exist");
        assert_eq!(stored.done(), Some(true));
    }
}

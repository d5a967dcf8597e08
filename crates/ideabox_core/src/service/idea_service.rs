//! Idea use-case service.
//!
//! # Responsibility
//! - Single entry point for idea create/update/query.
//! - Assign identity and decide when the notifier is invoked.
//!
//! # Invariants
//! - Ids start at 1, increase by exactly 1 per created idea and are never
//!   reused. A rejected create consumes no id.
//! - `update` calls the notifier at most once, and only when the request
//!   carries a notify-worthy key for the idea's variant.
//! - A missing id never mutates state or reaches the notifier.

use crate::model::idea::{
    parse_idea_kind, Idea, IdeaId, IdeaKind, IdeaUpdate, NewIdea, UnknownIdeaKind,
};
use crate::notify::{NotificationService, NotifyError};
use crate::repo::idea_repo::{IdeaRepository, InMemoryIdeaRepository};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First id handed out by a fresh service.
pub const FIRST_IDEA_ID: IdeaId = 1;

pub type IdeaServiceResult<T> = Result<T, IdeaServiceError>;

/// Service error for idea use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaServiceError {
    /// Type tag names no known variant.
    InvalidVariant(UnknownIdeaKind),
    /// No stored idea has this id.
    NotFound(IdeaId),
    /// Notifier rejected the call; passed through unchanged.
    Notification(NotifyError),
}

impl Display for IdeaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariant(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "No Idea found with id {id}"),
            Self::Notification(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IdeaServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidVariant(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Notification(err) => Some(err),
        }
    }
}

impl From<UnknownIdeaKind> for IdeaServiceError {
    fn from(value: UnknownIdeaKind) -> Self {
        Self::InvalidVariant(value)
    }
}

impl From<NotifyError> for IdeaServiceError {
    fn from(value: NotifyError) -> Self {
        Self::Notification(value)
    }
}

/// Idea service facade over a repository and a notifier.
pub struct IdeaService<R: IdeaRepository, N: NotificationService> {
    repo: R,
    notifier: N,
    next_id: IdeaId,
}

impl<N: NotificationService> IdeaService<InMemoryIdeaRepository, N> {
    /// Creates a service backed by an empty in-memory repository.
    pub fn in_memory(notifier: N) -> Self {
        Self::new(InMemoryIdeaRepository::new(), notifier)
    }
}

impl<R: IdeaRepository, N: NotificationService> IdeaService<R, N> {
    /// Creates a service using the provided repository and notifier.
    ///
    /// The repository is expected to be empty; ids restart at 1.
    pub fn new(repo: R, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            next_id: FIRST_IDEA_ID,
        }
    }

    /// Constructs, stamps and stores a new idea of `kind`.
    ///
    /// Returns a copy of the stored instance.
    pub fn create(&mut self, kind: IdeaKind, params: NewIdea) -> Idea {
        let mut idea = Idea::construct(kind, params);
        let id = self.next_id;
        idea.stamp(id);
        self.next_id += 1;
        self.repo.insert(idea.clone());

        info!("event=idea_create module=service status=ok id={id} type={kind}");
        idea
    }

    /// Same as [`Self::create`] but selects the variant by tag string.
    ///
    /// # Errors
    /// - `InvalidVariant` when `tag` names no known variant.
    pub fn create_tagged(&mut self, tag: &str, params: NewIdea) -> IdeaServiceResult<Idea> {
        let kind = parse_idea_kind(tag).map_err(|err| {
            warn!("event=idea_create module=service status=error reason=invalid_variant");
            err
        })?;
        Ok(self.create(kind, params))
    }

    /// Lists every stored idea of `kind` in creation order.
    pub fn get_all_by_type(&self, kind: IdeaKind) -> Vec<Idea> {
        self.repo.list(Some(kind))
    }

    /// Same as [`Self::get_all_by_type`] but selects the variant by tag string.
    ///
    /// # Errors
    /// - `InvalidVariant` when `tag` names no known variant.
    pub fn get_all_by_tag(&self, tag: &str) -> IdeaServiceResult<Vec<Idea>> {
        let kind = parse_idea_kind(tag)?;
        Ok(self.get_all_by_type(kind))
    }

    /// Gets one idea by id.
    pub fn get(&self, id: IdeaId) -> Option<Idea> {
        self.repo.find(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Applies a partial update and notifies when the request is notable.
    ///
    /// Completes after the notifier call when one is made; otherwise
    /// completes immediately.
    ///
    /// # Errors
    /// - `NotFound` when no idea has `id`; nothing is mutated.
    /// - `Notification` when the notifier fails; the merge is already applied.
    pub async fn update(&mut self, id: IdeaId, update: IdeaUpdate) -> IdeaServiceResult<()> {
        let Some(idea) = self.repo.find_mut(id) else {
            warn!("event=idea_update module=service status=error reason=not_found id={id}");
            return Err(IdeaServiceError::NotFound(id));
        };

        idea.merge_update(&update);
        let kind = idea.kind();
        if !idea.should_notify(&update) {
            debug!("event=idea_update module=service status=ok id={id} type={kind} notify=false");
            return Ok(());
        }

        info!("event=idea_update module=service status=ok id={id} type={kind} notify=true");
        let idea: &Idea = idea;
        self.notifier.notify(idea).await.map_err(|err| {
            error!("event=idea_notify module=service status=error id={id} type={kind}");
            IdeaServiceError::Notification(err)
        })
    }
}

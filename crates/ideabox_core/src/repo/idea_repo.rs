//! Idea repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold stored ideas in creation order for the process lifetime.
//! - Provide lookup and per-variant listing over that ordered collection.
//!
//! # Invariants
//! - Only stamped ideas are inserted; the service owns id assignment.
//! - Listing preserves insertion order.
//! - Nothing is ever removed.

use crate::model::idea::{Idea, IdeaId, IdeaKind};

/// Storage interface for idea instances.
pub trait IdeaRepository {
    fn insert(&mut self, idea: Idea);
    fn find(&self, id: IdeaId) -> Option<&Idea>;
    fn find_mut(&mut self, id: IdeaId) -> Option<&mut Idea>;
    /// Lists stored ideas in insertion order, optionally filtered by kind.
    fn list(&self, kind: Option<IdeaKind>) -> Vec<Idea>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed repository. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryIdeaRepository {
    ideas: Vec<Idea>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdeaRepository for InMemoryIdeaRepository {
    fn insert(&mut self, idea: Idea) {
        debug_assert!(idea.is_stamped(), "repository only stores stamped ideas");
        self.ideas.push(idea);
    }

    fn find(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id() == id)
    }

    fn find_mut(&mut self, id: IdeaId) -> Option<&mut Idea> {
        self.ideas.iter_mut().find(|idea| idea.id() == id)
    }

    fn list(&self, kind: Option<IdeaKind>) -> Vec<Idea> {
        self.ideas
            .iter()
            .filter(|idea| kind.map_or(true, |kind| idea.kind() == kind))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.ideas.len()
    }
}

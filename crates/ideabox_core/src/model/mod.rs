//! Idea domain model.
//!
//! # Responsibility
//! - Define the tagged union of idea variants used by core business logic.
//! - Keep per-variant merge and notify rules next to the shapes they govern.
//!
//! # Invariants
//! - Every stored idea is identified by a repository-assigned `IdeaId`.
//! - Ideas are never deleted.

pub mod idea;

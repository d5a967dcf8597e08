//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract the idea service depends on.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Repositories preserve insertion order and never drop ideas.

pub mod idea_repo;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and notifier calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod idea_service;
pub mod shared;

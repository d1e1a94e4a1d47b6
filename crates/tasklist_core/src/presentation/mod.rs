//! Presentation view-models.
//!
//! # Responsibility
//! - Hold ephemeral per-form and per-row UI state (expanded, editing,
//!   removing, invalid-input cue).
//! - Translate user gestures into [`Intent`](crate::service::intent::Intent)s.
//!
//! # Invariants
//! - View-models never touch the store; they only emit intents.
//! - Nothing here is persisted.

pub mod add_form;
pub mod row;
pub mod summary;

//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical task list and apply mutation intents to it.
//! - Keep presentation layers decoupled from persistence details.

pub mod board;
pub mod intent;
pub mod task_store;

//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its enumerated attributes.
//! - Own the validation rules shared by store, repository and views.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Task text is never empty after trimming.

pub mod task;

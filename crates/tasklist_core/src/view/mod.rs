//! View derivation over the task list.
//!
//! # Responsibility
//! - Describe the view parameters (search, status, category, sort).
//! - Compute the displayed projection and aggregate counts as pure functions.
//!
//! # Invariants
//! - Derivation never mutates or reorders the canonical list.
//! - Counts are computed over the unfiltered list.

pub mod derive;
pub mod query;

//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the task list load/save contract used by the store.
//! - Isolate serialization and slot details from service orchestration.
//!
//! # Invariants
//! - Saves always write the complete list; there is no incremental diffing.
//! - Loads reject invalid persisted state instead of masking it; recovery
//!   policy belongs to the caller.

pub mod task_repo;

//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by repository, service and view layers.
//! - Provide pure helpers for identity generation and title validation.
//!
//! # Invariants
//! - Every task is identified by a stable, client-generated `TaskId`.
//! - Validation is a caller concern; the model never rejects a title itself.

pub mod task;

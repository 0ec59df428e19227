//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the task collection data access contract.
//! - Isolate blob encoding and store details from service orchestration.
//!
//! # Invariants
//! - Repositories perform no title validation.
//! - Corrupt persisted data is surfaced, never repaired or discarded.

pub mod task_repo;

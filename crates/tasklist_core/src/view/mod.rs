//! Task list presentation layer.
//!
//! # Responsibility
//! - Hold transient UI state (snapshot, draft title, inline error).
//! - Translate user interactions into service calls and re-fetches.
//! - Describe what a front-end must render, independent of any toolkit.
//!
//! # Invariants
//! - The view never mutates its task snapshot locally; only re-fetches do.
//! - Every failure either updates form state or reaches the `Notifier`.

pub mod notifier;
pub mod render;
pub mod task_view;

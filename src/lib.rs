//! routedit - editing core for domain-routing rule groups
//!
//! A rule set is a list of named groups, each bound to a network interface,
//! each holding an ordered list of rules that match domain names by one of
//! four pattern kinds (namespace, wildcard, regex, domain). This crate is the
//! editing surface for that structure: it validates rule patterns, normalizes
//! untrusted configuration documents, and drives the drag-and-drop gesture
//! state machine used to reorder rules and groups.
//!
//! # Architecture
//!
//! - [`core`] - Data model, schema normalization, reorder operations, errors
//! - [`validators`] - Pattern validation per rule kind
//! - [`dnd`] - Drag-and-drop gesture state machine and bindings
//! - [`api`] - HTTP client for the rule-set backend
//! - [`events`] - Toast/overlay notification channel
//! - [`config`] - Persisted user preferences (locale)
//! - [`utils`] - XDG directories and id generation
//!
//! # Design
//!
//! All of the editing logic is synchronous and single-threaded: validators
//! and the normalizer are pure functions, and the drag subsystem mutates an
//! explicitly owned [`dnd::DragState`] in response to discrete host events.
//! The only blocking calls are the HTTP helpers in [`api`], which carry a
//! fixed 30-second timeout and no retry policy.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod config;
pub mod core;
pub mod dnd;
pub mod events;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::model::{Config, Group, Interfaces, Rule, RuleKind};

//! Core rule-set data model and operations
//!
//! This module contains the types and logic for the in-memory rule set:
//!
//! - [`model`]: Groups, rules, kinds, schema normalization, reorder ops
//! - [`error`]: Error types for schema and transport failures

pub mod error;
pub mod model;

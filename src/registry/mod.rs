//! # Registry Core
//!
//! The two tables and their operations: the attorney-verification registry
//! and the infringement-case registry with its per-case ledgers. Both are
//! synchronous state machines; `crate::service` provides the serialized
//! execution wrapper around them.

pub mod attorney;
pub mod case;

pub use attorney::AttorneyRegistry;
pub use case::{AcceptOutcome, CaseRegistry};

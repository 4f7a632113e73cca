//! # Domain Layer (Inner Hexagon)
//!
//! Pure business types and rules for the dispute registry.
//! NO I/O, NO async, NO external dependencies beyond serde derives.
//!
//! - All types here are pure domain concepts.
//! - Dependencies point INWARD only (registries and adapters depend on
//!   this, not vice versa).

pub mod entities;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use value_objects::*;

//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the registry core and the outside world.
//!
//! - **Driving Ports (Inbound)**: `AttorneyRegistryApi`, `CaseRegistryApi`
//! - **Driven Ports (Outbound)**: `IdentityOracle`, `PatentOwnership`,
//!   `HeightSource`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

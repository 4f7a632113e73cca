//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the outbound ports, used by tests and by
//! `create_test_service`. A deployment inside a ledger host replaces these
//! with adapters over the host's identity, patent-registry, and height
//! facilities.

pub mod height;
pub mod oracle;
pub mod patent_ledger;

pub use height::ManualHeight;
pub use oracle::StaticIdentityOracle;
pub use patent_ledger::InMemoryPatentLedger;

//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the registry depends on. The surrounding ledger implements
//! these; the in-memory adapters in `crate::adapters` stand in for tests.
//!
//! Dependencies point INWARD: adapters implement these traits, the core
//! never knows which implementation it is talking to.

use crate::domain::value_objects::{BlockHeight, PatentId, Principal};

// =============================================================================
// IDENTITY ORACLE
// =============================================================================

/// Supplies the single privileged "contract owner" identity.
///
/// The registry never verifies signatures. Callers arrive already
/// authenticated by the execution environment; this oracle only answers
/// which principal holds the owner role so operations can compare against
/// it.
pub trait IdentityOracle: Send + Sync {
    /// The principal permitted to verify evidence and attorneys and to
    /// override case statuses.
    fn contract_owner(&self) -> Principal;
}

// =============================================================================
// PATENT OWNERSHIP
// =============================================================================

/// External registry of patent ownership.
///
/// Consulted only by `report_infringement`: a case may only be filed by a
/// principal that owns the referenced patent.
pub trait PatentOwnership: Send + Sync {
    /// Returns true if `principal` is the verified owner of `patent`.
    fn owns_patent(&self, principal: &Principal, patent: PatentId) -> bool;
}

// =============================================================================
// HEIGHT SOURCE
// =============================================================================

/// Supplies the current ledger height.
///
/// Every operation stamps its timestamps (and derives evidence identifiers)
/// from this value at call time; the core never computes time internally.
pub trait HeightSource: Send + Sync {
    /// Height of the ledger at the moment the operation is admitted.
    fn current_height(&self) -> BlockHeight;
}

// =============================================================================
// TESTS
// =============================================================================

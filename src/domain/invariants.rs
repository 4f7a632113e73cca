//! # Domain Invariants
//!
//! The case lifecycle transition table and the cross-entity checks every
//! mutating operation validates before writing.
//!
//! The status order is `reported < evidence-submitted <
//! enforcement-initiated < settlement-proposed`; direct updates may only
//! move forward through that order or dismiss the case. `resolved` is
//! reachable solely through settlement execution, so it never appears as a
//! valid direct-update target.

use crate::domain::entities::{CaseStatus, Settlement};
use crate::domain::value_objects::Principal;

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Position of a status on the forward path. Terminal states have no rank.
fn rank(status: CaseStatus) -> Option<u8> {
    match status {
        CaseStatus::Reported => Some(0),
        CaseStatus::EvidenceSubmitted => Some(1),
        CaseStatus::EnforcementInitiated => Some(2),
        CaseStatus::SettlementProposed => Some(3),
        CaseStatus::Resolved | CaseStatus::Dismissed => None,
    }
}

/// Returns true if a direct status update from `from` to `to` is allowed.
///
/// - Terminal states accept no further updates.
/// - `resolved` is never a valid target here; it is set only by settlement
///   execution.
/// - `dismissed` is reachable from any non-terminal state.
/// - Otherwise the update must move strictly forward; regression has no
///   reopen path.
#[must_use]
pub fn transition_allowed(from: CaseStatus, to: CaseStatus) -> bool {
    let Some(from_rank) = rank(from) else {
        return false;
    };
    match to {
        CaseStatus::Resolved => false,
        CaseStatus::Dismissed => true,
        _ => match rank(to) {
            Some(to_rank) => to_rank > from_rank,
            None => false,
        },
    }
}

// =============================================================================
// CROSS-ENTITY CHECKS
// =============================================================================

/// A case may not name the same principal on both sides.
#[must_use]
pub fn parties_distinct(reporter: &Principal, alleged_infringer: &Principal) -> bool {
    reporter != alleged_infringer
}

/// A settlement executes only once both parties have recorded agreement.
#[must_use]
pub fn settlement_executable(settlement: &Settlement) -> bool {
    settlement.both_agreed()
}

// =============================================================================
// TESTS
// =============================================================================

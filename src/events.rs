//! # Wire Types & Events
//!
//! The tagged result envelope external callers receive, and the domain
//! events the service publishes after each successful mutation. Failed
//! operations publish nothing.

use crate::domain::entities::{ActionType, AttorneyStatus, CaseStatus};
use crate::domain::value_objects::{AttorneyId, BlockHeight, CaseId, EvidenceId, PatentId, Principal};
use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// RESULT ENVELOPE
// =============================================================================

/// Tagged result of a mutating operation as external callers see it.
///
/// Serializes as `{"ok": value}` on success and `{"error": code}` on
/// failure, where `code` is the stable numeric code from
/// `crate::errors::codes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxResult<T> {
    /// The operation succeeded with this value.
    #[serde(rename = "ok")]
    Ok(T),
    /// The operation failed with this stable numeric code.
    #[serde(rename = "error")]
    Err(u32),
}

impl<T> TxResult<T> {
    /// Returns true if this is the `ok` arm.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl<T> From<Result<T, RegistryError>> for TxResult<T> {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err.code()),
        }
    }
}

// =============================================================================
// DOMAIN EVENTS
// =============================================================================

/// A domain event describing one successful mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum RegistryEvent {
    /// An attorney registered.
    AttorneyRegistered {
        /// Newly allocated identifier.
        attorney_id: AttorneyId,
        /// Registering principal.
        principal: Principal,
    },
    /// The contract owner changed an attorney's status.
    AttorneyStatusChanged {
        /// Affected attorney.
        attorney_id: AttorneyId,
        /// New status.
        status: AttorneyStatus,
    },
    /// A case was filed.
    CaseReported {
        /// Newly allocated identifier.
        case_id: CaseId,
        /// Patent the case is about.
        patent_id: PatentId,
        /// Filing principal.
        reporter: Principal,
    },
    /// A party submitted evidence.
    EvidenceSubmitted {
        /// Owning case.
        case_id: CaseId,
        /// Identifier derived from the submission height.
        evidence_id: EvidenceId,
    },
    /// The contract owner set an evidence entry's verified flag.
    EvidenceVerified {
        /// Owning case.
        case_id: CaseId,
        /// Affected entry.
        evidence_id: EvidenceId,
        /// New flag value.
        verified: bool,
    },
    /// An enforcement action was initiated or replaced.
    EnforcementInitiated {
        /// Owning case.
        case_id: CaseId,
        /// Kind of action.
        action_type: ActionType,
    },
    /// A settlement was proposed or re-proposed.
    SettlementProposed {
        /// Owning case.
        case_id: CaseId,
        /// Proposed amount.
        settlement_amount: u64,
    },
    /// One party recorded agreement; the counterparty has not.
    SettlementAccepted {
        /// Owning case.
        case_id: CaseId,
        /// Party that agreed.
        accepted_by: Principal,
    },
    /// Both parties agreed and the settlement executed.
    SettlementExecuted {
        /// Resolved case.
        case_id: CaseId,
    },
    /// A direct status override was applied.
    CaseStatusChanged {
        /// Affected case.
        case_id: CaseId,
        /// New status.
        status: CaseStatus,
    },
}

/// Envelope published on the service's event channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EventEnvelope {
    /// Unique identifier of this emission.
    pub event_id: Uuid,
    /// Ledger height at which the mutation was admitted.
    pub height: BlockHeight,
    /// The event itself.
    pub event: RegistryEvent,
}

impl EventEnvelope {
    /// Wraps an event with a fresh identifier.
    #[must_use]
    pub fn new(height: BlockHeight, event: RegistryEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            height,
            event,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

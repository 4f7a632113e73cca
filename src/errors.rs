//! # Error Types
//!
//! All failures a mutating operation can return, with the stable numeric
//! codes external callers pattern-match on. Read-only queries never produce
//! an error; absence is an `Option`.

use crate::domain::entities::CaseStatus;
use crate::domain::value_objects::{AttorneyId, CaseId, EvidenceId, Principal};
use thiserror::Error;

/// Stable numeric error codes.
///
/// These are published to external callers and must never change once
/// released.
pub mod codes {
    /// Caller lacks the required role.
    pub const UNAUTHORIZED: u32 = 100;
    /// Referenced attorney identifier does not exist.
    pub const ATTORNEY_NOT_FOUND: u32 = 101;
    /// Principal already has an attorney record.
    pub const ATTORNEY_EXISTS: u32 = 102;
    /// Referenced case identifier does not exist.
    pub const CASE_NOT_FOUND: u32 = 103;
    /// Referenced evidence entry does not exist.
    pub const EVIDENCE_NOT_FOUND: u32 = 104;
    /// No enforcement action recorded for the case.
    pub const ACTION_NOT_FOUND: u32 = 105;
    /// No settlement recorded for the case.
    pub const SETTLEMENT_NOT_FOUND: u32 = 106;
    /// Operation conflicts with the case's current status.
    pub const INVALID_STATUS: u32 = 107;
    /// Reporter and alleged infringer must be distinct.
    pub const INVALID_PARTY: u32 = 108;
    /// A text input exceeds its configured length limit.
    pub const INVALID_ARGUMENT: u32 = 109;
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by mutating registry operations.
///
/// Every variant is recoverable by the caller: no failure leaves the
/// registry in an invalid state, and no operation partially mutates state
/// on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller lacks the required role for this operation.
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    /// Referenced attorney identifier is absent from the registry.
    #[error("attorney not found: {0}")]
    AttorneyNotFound(AttorneyId),

    /// Principal already has an attorney record.
    #[error("attorney already registered for principal {0}")]
    AttorneyExists(Principal),

    /// Referenced case identifier is absent from the registry.
    #[error("case not found: {0}")]
    CaseNotFound(CaseId),

    /// Referenced evidence entry is absent from the ledger.
    #[error("evidence not found: case {case_id}, evidence {evidence_id}")]
    EvidenceNotFound {
        /// Case the lookup targeted.
        case_id: CaseId,
        /// Evidence identifier that was not found.
        evidence_id: EvidenceId,
    },

    /// No enforcement action recorded for the case.
    #[error("no enforcement action recorded for case {0}")]
    ActionNotFound(CaseId),

    /// No settlement recorded for the case.
    #[error("no settlement recorded for case {0}")]
    SettlementNotFound(CaseId),

    /// Operation conflicts with the case's current status.
    #[error("operation not valid while case status is {0}")]
    InvalidStatus(CaseStatus),

    /// Requested direct status change is not in the transition table.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Status the case is currently in.
        from: CaseStatus,
        /// Status that was requested.
        to: CaseStatus,
    },

    /// Reporter and alleged infringer must be distinct principals.
    #[error("reporter and alleged infringer must be distinct principals")]
    InvalidParty,

    /// A text input exceeds its configured length limit.
    #[error("{field} exceeds maximum length of {max}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,
        /// Configured maximum length.
        max: usize,
    },
}

impl RegistryError {
    /// Returns the stable numeric code for this error.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::Unauthorized => codes::UNAUTHORIZED,
            Self::AttorneyNotFound(_) => codes::ATTORNEY_NOT_FOUND,
            Self::AttorneyExists(_) => codes::ATTORNEY_EXISTS,
            Self::CaseNotFound(_) => codes::CASE_NOT_FOUND,
            Self::EvidenceNotFound { .. } => codes::EVIDENCE_NOT_FOUND,
            Self::ActionNotFound(_) => codes::ACTION_NOT_FOUND,
            Self::SettlementNotFound(_) => codes::SETTLEMENT_NOT_FOUND,
            Self::InvalidStatus(_) | Self::InvalidTransition { .. } => codes::INVALID_STATUS,
            Self::InvalidParty => codes::INVALID_PARTY,
            Self::InvalidArgument { .. } => codes::INVALID_ARGUMENT,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Driving Ports (API - Inbound)
//!
//! The public operations of the two registries. `crate::service` implements
//! both traits; external systems hold them as trait objects.
//!
//! Mutating operations return `Result` with a `RegistryError` carrying a
//! stable numeric code. Read-only queries return an `Option` and never
//! fail: absence is "no value", not an error.

use crate::domain::entities::{
    ActionType, Attorney, AttorneyStatus, CaseStatus, EnforcementAction, Evidence, EvidenceType,
    InfringementCase, Settlement, Severity,
};
use crate::domain::value_objects::{AttorneyId, CaseId, EvidenceId, PatentId, Principal};
use crate::errors::RegistryError;
use async_trait::async_trait;

// =============================================================================
// REQUEST SHAPES
// =============================================================================

/// Registration details for a new attorney.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttorneyProfile {
    /// Display name.
    pub name: String,
    /// Area of practice.
    pub specialization: String,
    /// Bar association number.
    pub bar_number: String,
}

/// Filing details for a new infringement case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    /// Patent the case is about. The caller must own it.
    pub patent_id: PatentId,
    /// Counterparty accused in the case.
    pub alleged_infringer: Principal,
    /// Free-text description of the alleged infringement.
    pub description: String,
    /// Severity claimed by the reporter.
    pub severity: Severity,
    /// Damages claimed by the reporter.
    pub damages_claimed: u64,
}

// =============================================================================
// ATTORNEY REGISTRY API
// =============================================================================

/// Operations on the attorney-verification registry.
#[async_trait]
pub trait AttorneyRegistryApi: Send + Sync {
    /// Registers the caller as an attorney with status `pending`.
    ///
    /// Fails with `AttorneyExists` (102) if the caller already has a
    /// record. Returns the newly allocated sequential identifier.
    async fn register_attorney(
        &self,
        caller: Principal,
        profile: AttorneyProfile,
    ) -> Result<AttorneyId, RegistryError>;

    /// Sets an attorney's verification status. Contract owner only.
    ///
    /// Fails with `Unauthorized` (100) for any other caller and
    /// `AttorneyNotFound` (101) if the identifier is absent. The derived
    /// `verified` flag follows the status.
    async fn verify_attorney(
        &self,
        caller: Principal,
        attorney_id: AttorneyId,
        status: AttorneyStatus,
    ) -> Result<bool, RegistryError>;

    /// Distinct entry point for non-verification status changes such as
    /// suspension. Shares the owner-only gate of [`verify_attorney`].
    ///
    /// [`verify_attorney`]: AttorneyRegistryApi::verify_attorney
    async fn update_attorney_status(
        &self,
        caller: Principal,
        attorney_id: AttorneyId,
        status: AttorneyStatus,
    ) -> Result<bool, RegistryError>;

    /// Returns the attorney record, if present.
    async fn get_attorney(&self, attorney_id: AttorneyId) -> Option<Attorney>;

    /// Returns true iff the attorney exists and is verified.
    async fn is_attorney_verified(&self, attorney_id: AttorneyId) -> bool;

    /// Number of attorneys ever registered.
    async fn total_attorneys(&self) -> u64;
}

// =============================================================================
// CASE REGISTRY API
// =============================================================================

/// Operations on the infringement-case registry and its per-case ledgers.
#[async_trait]
pub trait CaseRegistryApi: Send + Sync {
    /// Files a new case with status `reported`.
    ///
    /// Fails with `Unauthorized` (100) unless the caller owns the
    /// referenced patent per the patent-ownership collaborator, and with
    /// `InvalidParty` (108) if the caller accuses themself. Returns the
    /// newly allocated sequential case identifier.
    async fn report_infringement(
        &self,
        caller: Principal,
        report: CaseReport,
    ) -> Result<CaseId, RegistryError>;

    /// Appends an evidence entry to a case. Parties only.
    ///
    /// The identifier is derived from the current ledger height. Moves a
    /// freshly `reported` case to `evidence-submitted`; later submissions
    /// leave the status untouched.
    async fn submit_evidence(
        &self,
        caller: Principal,
        case_id: CaseId,
        evidence_type: EvidenceType,
        description: String,
    ) -> Result<EvidenceId, RegistryError>;

    /// Sets the verified flag on an evidence entry. Contract owner only.
    async fn verify_evidence(
        &self,
        caller: Principal,
        case_id: CaseId,
        evidence_id: EvidenceId,
        verified: bool,
    ) -> Result<bool, RegistryError>;

    /// Records the case's enforcement action, replacing any active one,
    /// and moves the case to `enforcement-initiated`. Reporter or contract
    /// owner only.
    async fn initiate_enforcement(
        &self,
        caller: Principal,
        case_id: CaseId,
        action_type: ActionType,
    ) -> Result<bool, RegistryError>;

    /// Records a settlement proposal, replacing any existing one and
    /// clearing both agreement flags, and moves the case to
    /// `settlement-proposed`. Parties only.
    async fn propose_settlement(
        &self,
        caller: Principal,
        case_id: CaseId,
        amount: u64,
        terms: String,
    ) -> Result<bool, RegistryError>;

    /// Records the caller's agreement to the proposed settlement.
    ///
    /// The reporter sets `agreed-by-patent-holder`, the alleged infringer
    /// sets `agreed-by-infringer`. Once both flags are set the settlement
    /// executes atomically: the settlement date is stamped and the case
    /// becomes `resolved`.
    async fn accept_settlement(
        &self,
        caller: Principal,
        case_id: CaseId,
    ) -> Result<bool, RegistryError>;

    /// Direct status override for statuses the lifecycle operations do not
    /// reach, e.g. `dismissed`. Reporter or contract owner only; the
    /// transition table in `domain::invariants` gates which moves are
    /// accepted.
    async fn update_case_status(
        &self,
        caller: Principal,
        case_id: CaseId,
        new_status: CaseStatus,
    ) -> Result<bool, RegistryError>;

    /// Returns the case record, if present.
    async fn get_case(&self, case_id: CaseId) -> Option<InfringementCase>;

    /// Returns an evidence entry, if present.
    async fn get_evidence(&self, case_id: CaseId, evidence_id: EvidenceId) -> Option<Evidence>;

    /// Returns the case's enforcement action, if one was initiated.
    async fn get_enforcement_action(&self, case_id: CaseId) -> Option<EnforcementAction>;

    /// Returns the case's settlement record, if one was proposed.
    async fn get_settlement(&self, case_id: CaseId) -> Option<Settlement>;

    /// True iff the case exists and its status is `resolved`.
    async fn is_resolved(&self, case_id: CaseId) -> bool;

    /// Number of cases ever filed.
    async fn total_cases(&self) -> u64;
}

// =============================================================================
// TESTS
// =============================================================================

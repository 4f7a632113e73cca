//! # Core Domain Entities
//!
//! The record shapes held by the registry tables, and the enums that gate
//! their lifecycles. Serialized field and variant names use kebab-case to
//! stay byte-compatible with the tuple keys external callers already
//! pattern-match on (`agreed-by-infringer`, `cease-and-desist`, ...).

use crate::domain::value_objects::{BlockHeight, PatentId, Principal};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ATTORNEY
// =============================================================================

/// Verification status of a registered attorney.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttorneyStatus {
    /// Registered, awaiting review by the contract owner.
    Pending,
    /// Approved by the contract owner.
    Verified,
    /// Suspended by the contract owner.
    Suspended,
}

impl fmt::Display for AttorneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Suspended => "suspended",
        })
    }
}

/// A registered intellectual-property attorney.
///
/// ## Invariants
/// - One record per principal; the identifier is immutable after creation.
/// - `verified` is derived: true iff `status == Verified`. Use
///   [`Attorney::set_status`] so the flag never drifts from the status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Attorney {
    /// Principal that owns this registration.
    pub principal: Principal,
    /// Display name.
    pub name: String,
    /// Area of practice.
    pub specialization: String,
    /// Bar association number.
    pub bar_number: String,
    /// Current verification status.
    pub status: AttorneyStatus,
    /// Height at which the attorney registered.
    pub registration_date: BlockHeight,
    /// Derived flag: true iff `status` is `Verified`.
    pub verified: bool,
}

impl Attorney {
    /// Sets the status and recomputes the derived `verified` flag.
    pub fn set_status(&mut self, status: AttorneyStatus) {
        self.status = status;
        self.verified = status == AttorneyStatus::Verified;
    }
}

// =============================================================================
// INFRINGEMENT CASE
// =============================================================================

/// Severity claimed by the reporter when filing a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Minor or incidental use.
    Low,
    /// Limited commercial impact.
    Medium,
    /// Substantial commercial impact.
    High,
    /// Core product or willful infringement.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        })
    }
}

/// Lifecycle status of an infringement case.
///
/// Forward path: `reported → evidence-submitted → enforcement-initiated →
/// settlement-proposed → resolved`, with `dismissed` reachable from any
/// non-terminal state. `evidence-submitted` is an aggregate label: evidence
/// may keep arriving at any point before a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    /// Freshly filed.
    Reported,
    /// At least one evidence entry recorded.
    EvidenceSubmitted,
    /// An enforcement action is active.
    EnforcementInitiated,
    /// A settlement is on the table.
    SettlementProposed,
    /// Settled by bilateral agreement. Terminal.
    Resolved,
    /// Dropped by the reporter or the contract owner. Terminal.
    Dismissed,
}

impl CaseStatus {
    /// Returns true for the terminal states `resolved` and `dismissed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Dismissed)
    }

    /// Returns true iff the case settled.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reported => "reported",
            Self::EvidenceSubmitted => "evidence-submitted",
            Self::EnforcementInitiated => "enforcement-initiated",
            Self::SettlementProposed => "settlement-proposed",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        })
    }
}

/// One infringement dispute tracked through its lifecycle.
///
/// ## Invariants
/// - `reporter != alleged_infringer`.
/// - The case identifier is immutable after creation.
/// - `status` only advances through the transition table in
///   `domain::invariants`; there is no reopen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InfringementCase {
    /// Patent the case is about.
    pub patent_id: PatentId,
    /// Patent holder that filed the case.
    pub reporter: Principal,
    /// Counterparty accused in the case.
    pub alleged_infringer: Principal,
    /// Free-text description of the alleged infringement.
    pub description: String,
    /// Severity claimed by the reporter.
    pub severity: Severity,
    /// Current lifecycle status.
    pub status: CaseStatus,
    /// Height at which the case was filed.
    pub report_date: BlockHeight,
    /// Height at which the case resolved. Absent until resolution.
    pub resolution_date: Option<BlockHeight>,
    /// Damages claimed by the reporter.
    pub damages_claimed: u64,
}

impl InfringementCase {
    /// Returns true if `principal` is the reporter or the alleged infringer.
    #[must_use]
    pub fn is_party(&self, principal: &Principal) -> bool {
        &self.reporter == principal || &self.alleged_infringer == principal
    }

    /// Returns true if `principal` filed the case.
    #[must_use]
    pub fn is_reporter(&self, principal: &Principal) -> bool {
        &self.reporter == principal
    }
}

// =============================================================================
// EVIDENCE
// =============================================================================

/// Category of a submitted evidence entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceType {
    /// Written material (contracts, product sheets, correspondence).
    Documentation,
    /// Witness or expert testimony.
    Testimony,
    /// Technical comparison or teardown.
    TechnicalAnalysis,
    /// Anything else.
    Other,
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Documentation => "documentation",
            Self::Testimony => "testimony",
            Self::TechnicalAnalysis => "technical-analysis",
            Self::Other => "other",
        })
    }
}

/// An append-only evidence entry attached to a case.
///
/// Submitters must be a party to the case; only the contract owner may flip
/// `verified`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Evidence {
    /// Category of the entry.
    pub evidence_type: EvidenceType,
    /// Free-text description.
    pub description: String,
    /// Party that submitted the entry.
    pub submitted_by: Principal,
    /// Height at which the entry was submitted.
    pub submission_date: BlockHeight,
    /// Set by the contract owner after review. Defaults to false.
    pub verified: bool,
}

// =============================================================================
// ENFORCEMENT ACTION
// =============================================================================

/// Kind of enforcement action taken against the alleged infringer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    /// Formal demand to stop the infringing activity.
    CeaseAndDesist,
    /// Court proceedings.
    Litigation,
    /// Court-ordered halt.
    Injunction,
    /// Anything else.
    Other,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CeaseAndDesist => "cease-and-desist",
            Self::Litigation => "litigation",
            Self::Injunction => "injunction",
            Self::Other => "other",
        })
    }
}

/// Progress of an enforcement action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    /// Filed, no response yet.
    Initiated,
    /// Being contested or negotiated.
    InProgress,
    /// Finished; `outcome` is set.
    Concluded,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initiated => "initiated",
            Self::InProgress => "in-progress",
            Self::Concluded => "concluded",
        })
    }
}

/// The single active enforcement action on a case.
///
/// A later initiation replaces the record; `outcome` stays absent until the
/// action concludes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnforcementAction {
    /// Kind of action.
    pub action_type: ActionType,
    /// Reporter or contract owner that initiated the action.
    pub initiated_by: Principal,
    /// The case's alleged infringer.
    pub target: Principal,
    /// Height at which the action was initiated.
    pub action_date: BlockHeight,
    /// Progress of the action.
    pub status: ActionStatus,
    /// Result of the action. Absent until concluded.
    pub outcome: Option<String>,
}

impl EnforcementAction {
    /// Marks the action concluded with the given outcome.
    pub fn conclude(&mut self, outcome: impl Into<String>) {
        self.status = ActionStatus::Concluded;
        self.outcome = Some(outcome.into());
    }
}

// =============================================================================
// SETTLEMENT
// =============================================================================

/// A settlement proposal awaiting bilateral agreement.
///
/// ## Invariants
/// - Each agreement flag may only be set by the respective principal.
/// - `settlement_date` is set only on execution, which requires both flags.
/// - A fresh proposal replaces the record and clears both flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settlement {
    /// Proposed amount.
    pub settlement_amount: u64,
    /// Proposed terms.
    pub terms: String,
    /// Height at which the proposal was recorded.
    pub proposal_date: BlockHeight,
    /// Set by the alleged infringer.
    pub agreed_by_infringer: bool,
    /// Set by the reporter (the patent holder).
    pub agreed_by_patent_holder: bool,
    /// Height of execution. Absent until both parties agreed.
    pub settlement_date: Option<BlockHeight>,
}

impl Settlement {
    /// Creates a fresh proposal with both agreement flags cleared.
    #[must_use]
    pub fn proposed(amount: u64, terms: String, height: BlockHeight) -> Self {
        Self {
            settlement_amount: amount,
            terms,
            proposal_date: height,
            agreed_by_infringer: false,
            agreed_by_patent_holder: false,
            settlement_date: None,
        }
    }

    /// Returns true once both parties have recorded agreement.
    #[must_use]
    pub fn both_agreed(&self) -> bool {
        self.agreed_by_infringer && self.agreed_by_patent_holder
    }
}

// =============================================================================
// TESTS
// =============================================================================

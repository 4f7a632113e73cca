//! # Case Registry
//!
//! The infringement-case table and its per-case ledgers: evidence entries,
//! the single active enforcement action, and the settlement record. This is
//! the central state machine of the system.
//!
//! Every operation validates all preconditions before performing any write,
//! so a rejected call leaves every table unchanged. Methods are synchronous;
//! the caller provides the serialized-execution guarantee (the service
//! wraps the registry in a single write lock).

use crate::domain::entities::{
    ActionStatus, ActionType, CaseStatus, EnforcementAction, Evidence, EvidenceType,
    InfringementCase, Settlement,
};
use crate::domain::invariants;
use crate::domain::value_objects::{
    BlockHeight, CaseId, EvidenceId, EvidenceSequencer, Principal, SequenceCounter,
};
use crate::errors::RegistryError;
use crate::ports::inbound::CaseReport;
use std::collections::{BTreeMap, HashMap};

/// Outcome recorded on an enforcement action when settlement executes.
const OUTCOME_SETTLED: &str = "settled";

/// What an `accept_settlement` call achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The caller's agreement flag was recorded; the counterparty has not
    /// agreed yet.
    Recorded,
    /// Both flags are now set and the settlement executed: the case is
    /// resolved.
    Executed,
}

/// The case table and its dependent ledgers.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    cases: BTreeMap<CaseId, InfringementCase>,
    evidence: BTreeMap<(CaseId, EvidenceId), Evidence>,
    actions: HashMap<CaseId, EnforcementAction>,
    settlements: HashMap<CaseId, Settlement>,
    ids: SequenceCounter,
    evidence_ids: EvidenceSequencer,
}

impl CaseRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // LIFECYCLE OPERATIONS
    // =========================================================================

    /// Files a new case with status `reported`.
    ///
    /// Patent ownership is the service's concern (it holds the collaborator
    /// port); this method enforces the party invariant and allocates the
    /// identifier.
    pub fn open_case(
        &mut self,
        reporter: &Principal,
        report: CaseReport,
        height: BlockHeight,
    ) -> Result<CaseId, RegistryError> {
        if !invariants::parties_distinct(reporter, &report.alleged_infringer) {
            return Err(RegistryError::InvalidParty);
        }

        let id = CaseId::new(self.ids.allocate());
        self.cases.insert(
            id,
            InfringementCase {
                patent_id: report.patent_id,
                reporter: reporter.clone(),
                alleged_infringer: report.alleged_infringer,
                description: report.description,
                severity: report.severity,
                status: CaseStatus::Reported,
                report_date: height,
                resolution_date: None,
                damages_claimed: report.damages_claimed,
            },
        );
        Ok(id)
    }

    /// Appends an evidence entry. The caller must be a party to the case,
    /// and the case must not be terminal.
    ///
    /// A freshly `reported` case moves to `evidence-submitted`; any later
    /// status is already past that point and stays as it is.
    pub fn submit_evidence(
        &mut self,
        caller: &Principal,
        case_id: CaseId,
        evidence_type: EvidenceType,
        description: String,
        height: BlockHeight,
    ) -> Result<EvidenceId, RegistryError> {
        let case = self
            .cases
            .get_mut(&case_id)
            .ok_or(RegistryError::CaseNotFound(case_id))?;
        if !case.is_party(caller) {
            return Err(RegistryError::Unauthorized);
        }
        if case.status.is_terminal() {
            return Err(RegistryError::InvalidStatus(case.status));
        }

        let evidence_id = self.evidence_ids.allocate(height);
        self.evidence.insert(
            (case_id, evidence_id),
            Evidence {
                evidence_type,
                description,
                submitted_by: caller.clone(),
                submission_date: height,
                verified: false,
            },
        );
        if case.status == CaseStatus::Reported {
            case.status = CaseStatus::EvidenceSubmitted;
        }
        Ok(evidence_id)
    }

    /// Sets the verified flag on an evidence entry. Contract owner only,
    /// regardless of whether the entry exists.
    pub fn verify_evidence(
        &mut self,
        caller: &Principal,
        contract_owner: &Principal,
        case_id: CaseId,
        evidence_id: EvidenceId,
        verified: bool,
    ) -> Result<bool, RegistryError> {
        if caller != contract_owner {
            return Err(RegistryError::Unauthorized);
        }
        if !self.cases.contains_key(&case_id) {
            return Err(RegistryError::CaseNotFound(case_id));
        }
        let entry = self
            .evidence
            .get_mut(&(case_id, evidence_id))
            .ok_or(RegistryError::EvidenceNotFound {
                case_id,
                evidence_id,
            })?;
        entry.verified = verified;
        Ok(true)
    }

    /// Records the case's enforcement action and moves the case to
    /// `enforcement-initiated`. Reporter or contract owner only.
    ///
    /// A single action is active per case: a later initiation replaces the
    /// record.
    pub fn initiate_enforcement(
        &mut self,
        caller: &Principal,
        contract_owner: &Principal,
        case_id: CaseId,
        action_type: ActionType,
        height: BlockHeight,
    ) -> Result<bool, RegistryError> {
        let case = self
            .cases
            .get_mut(&case_id)
            .ok_or(RegistryError::CaseNotFound(case_id))?;
        if !case.is_reporter(caller) && caller != contract_owner {
            return Err(RegistryError::Unauthorized);
        }
        if case.status.is_terminal() {
            return Err(RegistryError::InvalidStatus(case.status));
        }

        self.actions.insert(
            case_id,
            EnforcementAction {
                action_type,
                initiated_by: caller.clone(),
                target: case.alleged_infringer.clone(),
                action_date: height,
                status: ActionStatus::Initiated,
                outcome: None,
            },
        );
        case.status = CaseStatus::EnforcementInitiated;
        Ok(true)
    }

    /// Records a settlement proposal and moves the case to
    /// `settlement-proposed`. Parties only.
    ///
    /// Re-proposing replaces the record and clears both agreement flags:
    /// prior agreement never carries over to new terms.
    pub fn propose_settlement(
        &mut self,
        caller: &Principal,
        case_id: CaseId,
        amount: u64,
        terms: String,
        height: BlockHeight,
    ) -> Result<bool, RegistryError> {
        let case = self
            .cases
            .get_mut(&case_id)
            .ok_or(RegistryError::CaseNotFound(case_id))?;
        if !case.is_party(caller) {
            return Err(RegistryError::Unauthorized);
        }
        if case.status.is_terminal() {
            return Err(RegistryError::InvalidStatus(case.status));
        }

        self.settlements
            .insert(case_id, Settlement::proposed(amount, terms, height));
        case.status = CaseStatus::SettlementProposed;
        Ok(true)
    }

    /// Records the caller's agreement; executes the settlement once both
    /// parties have agreed.
    ///
    /// Execution is atomic with the accepting write: the settlement date is
    /// stamped, the case moves to `resolved` with its resolution timestamp,
    /// and any active enforcement action concludes with outcome "settled".
    /// Accepting twice from the same side is a state conflict.
    pub fn accept_settlement(
        &mut self,
        caller: &Principal,
        case_id: CaseId,
        height: BlockHeight,
    ) -> Result<AcceptOutcome, RegistryError> {
        let case = self
            .cases
            .get_mut(&case_id)
            .ok_or(RegistryError::CaseNotFound(case_id))?;
        if !case.is_party(caller) {
            return Err(RegistryError::Unauthorized);
        }
        if case.status.is_terminal() {
            return Err(RegistryError::InvalidStatus(case.status));
        }
        let settlement = self
            .settlements
            .get_mut(&case_id)
            .ok_or(RegistryError::SettlementNotFound(case_id))?;

        let flag = if case.is_reporter(caller) {
            &mut settlement.agreed_by_patent_holder
        } else {
            &mut settlement.agreed_by_infringer
        };
        if *flag {
            return Err(RegistryError::InvalidStatus(case.status));
        }
        *flag = true;

        if !invariants::settlement_executable(settlement) {
            return Ok(AcceptOutcome::Recorded);
        }

        settlement.settlement_date = Some(height);
        case.status = CaseStatus::Resolved;
        case.resolution_date = Some(height);
        if let Some(action) = self.actions.get_mut(&case_id) {
            action.conclude(OUTCOME_SETTLED);
        }
        Ok(AcceptOutcome::Executed)
    }

    /// Direct status override for moves the lifecycle operations do not
    /// make, e.g. dismissal. Reporter or contract owner only; gated by the
    /// transition table.
    pub fn update_case_status(
        &mut self,
        caller: &Principal,
        contract_owner: &Principal,
        case_id: CaseId,
        new_status: CaseStatus,
    ) -> Result<bool, RegistryError> {
        let case = self
            .cases
            .get_mut(&case_id)
            .ok_or(RegistryError::CaseNotFound(case_id))?;
        if !case.is_reporter(caller) && caller != contract_owner {
            return Err(RegistryError::Unauthorized);
        }
        if !invariants::transition_allowed(case.status, new_status) {
            return Err(RegistryError::InvalidTransition {
                from: case.status,
                to: new_status,
            });
        }
        case.status = new_status;
        Ok(true)
    }

    // =========================================================================
    // READ-ONLY QUERIES
    // =========================================================================

    /// Returns the case record, if present.
    #[must_use]
    pub fn get_case(&self, case_id: CaseId) -> Option<&InfringementCase> {
        self.cases.get(&case_id)
    }

    /// Returns an evidence entry, if present.
    #[must_use]
    pub fn get_evidence(&self, case_id: CaseId, evidence_id: EvidenceId) -> Option<&Evidence> {
        self.evidence.get(&(case_id, evidence_id))
    }

    /// Returns the case's enforcement action, if one was initiated.
    #[must_use]
    pub fn get_enforcement_action(&self, case_id: CaseId) -> Option<&EnforcementAction> {
        self.actions.get(&case_id)
    }

    /// Returns the case's settlement record, if one was proposed.
    #[must_use]
    pub fn get_settlement(&self, case_id: CaseId) -> Option<&Settlement> {
        self.settlements.get(&case_id)
    }

    /// True iff the case exists and its status is `resolved`. A missing
    /// case is simply not resolved, never an error.
    #[must_use]
    pub fn is_resolved(&self, case_id: CaseId) -> bool {
        self.cases
            .get(&case_id)
            .is_some_and(|c| c.status.is_resolved())
    }

    /// Number of cases ever filed.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.ids.issued()
    }
}

// =============================================================================
// TESTS
// =============================================================================

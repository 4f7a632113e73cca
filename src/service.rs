//! # Registry Service
//!
//! Async facade over the two registries. Each operation takes the write
//! lock for its table group, consults the outbound ports for the contract
//! owner and the current height, validates input lengths from the config,
//! and publishes a domain event on success.
//!
//! The per-table-group `RwLock` recreates the serialized-execution model of
//! a ledger host: every mutating operation observes a consistent snapshot
//! and completes before the next one is admitted.

use crate::adapters::{InMemoryPatentLedger, ManualHeight, StaticIdentityOracle};
use crate::domain::entities::{
    ActionType, Attorney, AttorneyStatus, CaseStatus, EnforcementAction, Evidence, EvidenceType,
    InfringementCase, Settlement,
};
use crate::domain::value_objects::{AttorneyId, CaseId, EvidenceId, Principal};
use crate::errors::RegistryError;
use crate::events::{EventEnvelope, RegistryEvent};
use crate::ports::inbound::{AttorneyProfile, AttorneyRegistryApi, CaseRegistryApi, CaseReport};
use crate::ports::outbound::{HeightSource, IdentityOracle, PatentOwnership};
use crate::registry::{AcceptOutcome, AttorneyRegistry, CaseRegistry};

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Registry service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Maximum length of an attorney name.
    pub max_name_len: usize,
    /// Maximum length of an attorney specialization.
    pub max_specialization_len: usize,
    /// Maximum length of a bar number.
    pub max_bar_number_len: usize,
    /// Maximum length of a case or evidence description.
    pub max_description_len: usize,
    /// Maximum length of settlement terms.
    pub max_terms_len: usize,
    /// Capacity of the event broadcast channel.
    pub event_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_len: 100,
            max_specialization_len: 100,
            max_bar_number_len: 50,
            max_description_len: 500,
            max_terms_len: 500,
            event_capacity: 256,
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Running statistics for the registry service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total mutating operations handled.
    pub operations: u64,
    /// Operations rejected with an error.
    pub rejected: u64,
    /// Attorneys registered.
    pub attorneys_registered: u64,
    /// Cases filed.
    pub cases_reported: u64,
    /// Evidence entries recorded.
    pub evidence_submitted: u64,
    /// Settlements executed to resolution.
    pub settlements_executed: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The registry service.
///
/// Generic over the three outbound ports so tests can plug in the
/// in-memory adapters and a ledger host can plug in its own.
pub struct RegistryService<I, P, H>
where
    I: IdentityOracle,
    P: PatentOwnership,
    H: HeightSource,
{
    config: ServiceConfig,
    identity: Arc<I>,
    patents: Arc<P>,
    height: Arc<H>,
    attorneys: Arc<RwLock<AttorneyRegistry>>,
    cases: Arc<RwLock<CaseRegistry>>,
    stats: Arc<RwLock<ServiceStats>>,
    events: broadcast::Sender<EventEnvelope>,
}

impl<I, P, H> RegistryService<I, P, H>
where
    I: IdentityOracle,
    P: PatentOwnership,
    H: HeightSource,
{
    /// Creates a service over empty registries.
    #[must_use]
    pub fn new(identity: Arc<I>, patents: Arc<P>, height: Arc<H>, config: ServiceConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            config,
            identity,
            patents,
            height,
            attorneys: Arc::new(RwLock::new(AttorneyRegistry::new())),
            cases: Arc::new(RwLock::new(CaseRegistry::new())),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
            events,
        }
    }

    /// Subscribes to the domain event stream.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    /// Returns current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Rejects a text input longer than its configured limit.
    fn check_len(
        &self,
        field: &'static str,
        value: &str,
        max: usize,
    ) -> Result<(), RegistryError> {
        if value.len() > max {
            return Err(RegistryError::InvalidArgument { field, max });
        }
        Ok(())
    }

    /// Publishes an event; a missing subscriber is not an error.
    fn publish(&self, event: RegistryEvent) {
        let envelope = EventEnvelope::new(self.height.current_height(), event);
        let _ = self.events.send(envelope);
    }

    /// Records the outcome of a mutating operation in the stats.
    async fn track<T>(&self, result: Result<T, RegistryError>) -> Result<T, RegistryError> {
        let mut stats = self.stats.write().await;
        stats.operations += 1;
        if let Err(err) = &result {
            stats.rejected += 1;
            warn!(code = err.code(), error = %err, "operation rejected");
        }
        result
    }
}

// =============================================================================
// ATTORNEY REGISTRY API
// =============================================================================

#[async_trait]
impl<I, P, H> AttorneyRegistryApi for RegistryService<I, P, H>
where
    I: IdentityOracle,
    P: PatentOwnership,
    H: HeightSource,
{
    #[instrument(skip(self, profile), fields(caller = %caller))]
    async fn register_attorney(
        &self,
        caller: Principal,
        profile: AttorneyProfile,
    ) -> Result<AttorneyId, RegistryError> {
        let result = async {
            self.check_len("name", &profile.name, self.config.max_name_len)?;
            self.check_len(
                "specialization",
                &profile.specialization,
                self.config.max_specialization_len,
            )?;
            self.check_len(
                "bar-number",
                &profile.bar_number,
                self.config.max_bar_number_len,
            )?;

            let height = self.height.current_height();
            let id = self
                .attorneys
                .write()
                .await
                .register(&caller, profile, height)?;

            info!(attorney_id = %id, "attorney registered");
            self.stats.write().await.attorneys_registered += 1;
            self.publish(RegistryEvent::AttorneyRegistered {
                attorney_id: id,
                principal: caller.clone(),
            });
            Ok(id)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, attorney_id = %attorney_id))]
    async fn verify_attorney(
        &self,
        caller: Principal,
        attorney_id: AttorneyId,
        status: AttorneyStatus,
    ) -> Result<bool, RegistryError> {
        let result = async {
            let owner = self.identity.contract_owner();
            let ok = self
                .attorneys
                .write()
                .await
                .set_status(&caller, &owner, attorney_id, status)?;

            info!(%status, "attorney status set");
            self.publish(RegistryEvent::AttorneyStatusChanged {
                attorney_id,
                status,
            });
            Ok(ok)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, attorney_id = %attorney_id))]
    async fn update_attorney_status(
        &self,
        caller: Principal,
        attorney_id: AttorneyId,
        status: AttorneyStatus,
    ) -> Result<bool, RegistryError> {
        // Same gate and mechanics as verification; kept as a distinct
        // entry point for non-verification changes such as suspension.
        self.verify_attorney(caller, attorney_id, status).await
    }

    async fn get_attorney(&self, attorney_id: AttorneyId) -> Option<Attorney> {
        self.attorneys.read().await.get(attorney_id).cloned()
    }

    async fn is_attorney_verified(&self, attorney_id: AttorneyId) -> bool {
        self.attorneys.read().await.is_verified(attorney_id)
    }

    async fn total_attorneys(&self) -> u64 {
        self.attorneys.read().await.total()
    }
}

// =============================================================================
// CASE REGISTRY API
// =============================================================================

#[async_trait]
impl<I, P, H> CaseRegistryApi for RegistryService<I, P, H>
where
    I: IdentityOracle,
    P: PatentOwnership,
    H: HeightSource,
{
    #[instrument(skip(self, report), fields(caller = %caller, patent_id = %report.patent_id))]
    async fn report_infringement(
        &self,
        caller: Principal,
        report: CaseReport,
    ) -> Result<CaseId, RegistryError> {
        let result = async {
            if !self.patents.owns_patent(&caller, report.patent_id) {
                return Err(RegistryError::Unauthorized);
            }
            self.check_len(
                "description",
                &report.description,
                self.config.max_description_len,
            )?;

            let height = self.height.current_height();
            let patent_id = report.patent_id;
            let id = self.cases.write().await.open_case(&caller, report, height)?;

            info!(case_id = %id, "infringement case reported");
            self.stats.write().await.cases_reported += 1;
            self.publish(RegistryEvent::CaseReported {
                case_id: id,
                patent_id,
                reporter: caller.clone(),
            });
            Ok(id)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self, description), fields(caller = %caller, case_id = %case_id))]
    async fn submit_evidence(
        &self,
        caller: Principal,
        case_id: CaseId,
        evidence_type: EvidenceType,
        description: String,
    ) -> Result<EvidenceId, RegistryError> {
        let result = async {
            self.check_len("description", &description, self.config.max_description_len)?;

            let height = self.height.current_height();
            let id = self.cases.write().await.submit_evidence(
                &caller,
                case_id,
                evidence_type,
                description,
                height,
            )?;

            debug!(evidence_id = %id, %evidence_type, "evidence submitted");
            self.stats.write().await.evidence_submitted += 1;
            self.publish(RegistryEvent::EvidenceSubmitted {
                case_id,
                evidence_id: id,
            });
            Ok(id)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, case_id = %case_id))]
    async fn verify_evidence(
        &self,
        caller: Principal,
        case_id: CaseId,
        evidence_id: EvidenceId,
        verified: bool,
    ) -> Result<bool, RegistryError> {
        let result = async {
            let owner = self.identity.contract_owner();
            let ok = self.cases.write().await.verify_evidence(
                &caller,
                &owner,
                case_id,
                evidence_id,
                verified,
            )?;

            debug!(evidence_id = %evidence_id, verified, "evidence verification set");
            self.publish(RegistryEvent::EvidenceVerified {
                case_id,
                evidence_id,
                verified,
            });
            Ok(ok)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, case_id = %case_id))]
    async fn initiate_enforcement(
        &self,
        caller: Principal,
        case_id: CaseId,
        action_type: ActionType,
    ) -> Result<bool, RegistryError> {
        let result = async {
            let owner = self.identity.contract_owner();
            let height = self.height.current_height();
            let ok = self.cases.write().await.initiate_enforcement(
                &caller,
                &owner,
                case_id,
                action_type,
                height,
            )?;

            info!(%action_type, "enforcement initiated");
            self.publish(RegistryEvent::EnforcementInitiated {
                case_id,
                action_type,
            });
            Ok(ok)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self, terms), fields(caller = %caller, case_id = %case_id))]
    async fn propose_settlement(
        &self,
        caller: Principal,
        case_id: CaseId,
        amount: u64,
        terms: String,
    ) -> Result<bool, RegistryError> {
        let result = async {
            self.check_len("terms", &terms, self.config.max_terms_len)?;

            let height = self.height.current_height();
            let ok = self.cases.write().await.propose_settlement(
                &caller,
                case_id,
                amount,
                terms,
                height,
            )?;

            info!(amount, "settlement proposed");
            self.publish(RegistryEvent::SettlementProposed {
                case_id,
                settlement_amount: amount,
            });
            Ok(ok)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, case_id = %case_id))]
    async fn accept_settlement(
        &self,
        caller: Principal,
        case_id: CaseId,
    ) -> Result<bool, RegistryError> {
        let result = async {
            let height = self.height.current_height();
            let outcome = self
                .cases
                .write()
                .await
                .accept_settlement(&caller, case_id, height)?;

            self.publish(RegistryEvent::SettlementAccepted {
                case_id,
                accepted_by: caller.clone(),
            });
            if outcome == AcceptOutcome::Executed {
                info!("settlement executed, case resolved");
                self.stats.write().await.settlements_executed += 1;
                self.publish(RegistryEvent::SettlementExecuted { case_id });
            } else {
                debug!("settlement agreement recorded");
            }
            Ok(true)
        }
        .await;
        self.track(result).await
    }

    #[instrument(skip(self), fields(caller = %caller, case_id = %case_id, status = %new_status))]
    async fn update_case_status(
        &self,
        caller: Principal,
        case_id: CaseId,
        new_status: CaseStatus,
    ) -> Result<bool, RegistryError> {
        let result = async {
            let owner = self.identity.contract_owner();
            let ok = self.cases.write().await.update_case_status(
                &caller,
                &owner,
                case_id,
                new_status,
            )?;

            info!("case status overridden");
            self.publish(RegistryEvent::CaseStatusChanged {
                case_id,
                status: new_status,
            });
            Ok(ok)
        }
        .await;
        self.track(result).await
    }

    async fn get_case(&self, case_id: CaseId) -> Option<InfringementCase> {
        self.cases.read().await.get_case(case_id).cloned()
    }

    async fn get_evidence(&self, case_id: CaseId, evidence_id: EvidenceId) -> Option<Evidence> {
        self.cases
            .read()
            .await
            .get_evidence(case_id, evidence_id)
            .cloned()
    }

    async fn get_enforcement_action(&self, case_id: CaseId) -> Option<EnforcementAction> {
        self.cases
            .read()
            .await
            .get_enforcement_action(case_id)
            .cloned()
    }

    async fn get_settlement(&self, case_id: CaseId) -> Option<Settlement> {
        self.cases.read().await.get_settlement(case_id).cloned()
    }

    async fn is_resolved(&self, case_id: CaseId) -> bool {
        self.cases.read().await.is_resolved(case_id)
    }

    async fn total_cases(&self) -> u64 {
        self.cases.read().await.total()
    }
}

// =============================================================================
// TEST SERVICE
// =============================================================================

/// Service wired to the in-memory adapters, for testing.
///
/// Returns the patent ledger and height source alongside the service so
/// tests can grant ownership and advance the chain.
#[must_use]
pub fn create_test_service(
    contract_owner: Principal,
) -> (
    RegistryService<StaticIdentityOracle, InMemoryPatentLedger, ManualHeight>,
    Arc<InMemoryPatentLedger>,
    Arc<ManualHeight>,
) {
    let patents = Arc::new(InMemoryPatentLedger::new());
    let height = Arc::new(ManualHeight::new(1000));
    let service = RegistryService::new(
        Arc::new(StaticIdentityOracle::new(contract_owner)),
        Arc::clone(&patents),
        Arc::clone(&height),
        ServiceConfig::default(),
    );
    (service, patents, height)
}

// =============================================================================
// TESTS
// =============================================================================

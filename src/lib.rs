//! # IP Dispute Registry
//!
//! Permissioned registry for patent-infringement disputes and verified IP
//! attorneys. Cases move through a forward-only lifecycle from report to
//! resolution or dismissal, with evidence, enforcement actions, and a
//! bilateral settlement protocol recorded along the way. Every mutation is
//! gated on the caller's identity and either succeeds atomically or leaves
//! no trace.
//!
//! ## Architecture
//!
//! Hexagonal: pure domain state machines in [`domain`] and [`registry`],
//! trait seams in [`ports`], in-memory test adapters in [`adapters`], and
//! an async facade in [`service`] that serializes execution and publishes
//! [`events`].
//!
//! ## Error Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 100  | caller not authorized |
//! | 101  | attorney not found |
//! | 102  | principal already registered as an attorney |
//! | 103  | case not found |
//! | 104  | evidence not found |
//! | 105  | enforcement action not found |
//! | 106  | settlement not found |
//! | 107  | operation invalid for the case's status |
//! | 108  | invalid party |
//! | 109  | invalid argument |
//!
//! ## Usage
//!
//! ```ignore
//! use ip_dispute_registry::prelude::*;
//!
//! let (service, patents, _height) = create_test_service(Principal::new("deployer"));
//! patents.grant(PatentId::new(1), Principal::new("holder"));
//!
//! let case_id = service
//!     .report_infringement(
//!         Principal::new("holder"),
//!         CaseReport {
//!             patent_id: PatentId::new(1),
//!             alleged_infringer: Principal::new("infringer"),
//!             description: "Unauthorized use of patented technology".into(),
//!             severity: Severity::High,
//!             damages_claimed: 1_000_000,
//!         },
//!     )
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod registry;
pub mod service;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::adapters::{InMemoryPatentLedger, ManualHeight, StaticIdentityOracle};
    pub use crate::domain::entities::{
        ActionStatus, ActionType, Attorney, AttorneyStatus, CaseStatus, EnforcementAction,
        Evidence, EvidenceType, InfringementCase, Settlement, Severity,
    };
    pub use crate::domain::value_objects::{
        AttorneyId, BlockHeight, CaseId, EvidenceId, PatentId, Principal,
    };
    pub use crate::errors::RegistryError;
    pub use crate::events::{EventEnvelope, RegistryEvent, TxResult};
    pub use crate::ports::inbound::{
        AttorneyProfile, AttorneyRegistryApi, CaseRegistryApi, CaseReport,
    };
    pub use crate::ports::outbound::{HeightSource, IdentityOracle, PatentOwnership};
    pub use crate::service::{create_test_service, RegistryService, ServiceConfig};
}

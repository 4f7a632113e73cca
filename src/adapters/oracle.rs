//! # Identity Oracle Adapter
//!
//! Fixed-owner identity oracle for testing. A production deployment wires
//! the execution environment's deployer identity here instead.

use crate::domain::value_objects::Principal;
use crate::ports::outbound::IdentityOracle;

/// Identity oracle with a fixed contract owner.
#[derive(Debug, Clone)]
pub struct StaticIdentityOracle {
    owner: Principal,
}

impl StaticIdentityOracle {
    /// Creates an oracle that reports `owner` as the contract owner.
    #[must_use]
    pub fn new(owner: Principal) -> Self {
        Self { owner }
    }
}

impl IdentityOracle for StaticIdentityOracle {
    fn contract_owner(&self) -> Principal {
        self.owner.clone()
    }
}

//! # Patent Ledger Adapter
//!
//! In-memory patent-ownership table for testing. A production deployment
//! would query the external patent registry instead.

use crate::domain::value_objects::{PatentId, Principal};
use crate::ports::outbound::PatentOwnership;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory map of patent to owning principal.
#[derive(Debug, Default)]
pub struct InMemoryPatentLedger {
    owners: RwLock<HashMap<PatentId, Principal>>,
}

impl InMemoryPatentLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `principal` as the owner of `patent`, replacing any prior
    /// owner.
    pub fn grant(&self, patent: PatentId, principal: Principal) {
        self.owners.write().unwrap().insert(patent, principal);
    }

    /// Removes the ownership record for `patent`.
    pub fn revoke(&self, patent: PatentId) {
        self.owners.write().unwrap().remove(&patent);
    }
}

impl PatentOwnership for InMemoryPatentLedger {
    fn owns_patent(&self, principal: &Principal, patent: PatentId) -> bool {
        self.owners
            .read()
            .unwrap()
            .get(&patent)
            .is_some_and(|owner| owner == principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_check() {
        let ledger = InMemoryPatentLedger::new();
        let holder = Principal::new("holder");

        assert!(!ledger.owns_patent(&holder, PatentId::new(1)));

        ledger.grant(PatentId::new(1), holder.clone());
        assert!(ledger.owns_patent(&holder, PatentId::new(1)));
        assert!(!ledger.owns_patent(&Principal::new("other"), PatentId::new(1)));
        assert!(!ledger.owns_patent(&holder, PatentId::new(2)));
    }

    #[test]
    fn test_revoke() {
        let ledger = InMemoryPatentLedger::new();
        let holder = Principal::new("holder");

        ledger.grant(PatentId::new(1), holder.clone());
        ledger.revoke(PatentId::new(1));
        assert!(!ledger.owns_patent(&holder, PatentId::new(1)));
    }
}

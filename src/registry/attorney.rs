//! # Attorney Registry
//!
//! Table of registered IP attorneys keyed by a monotonically increasing
//! identifier, with an owner-gated verification step. One record per
//! principal; identifiers are never reused.

use crate::domain::entities::{Attorney, AttorneyStatus};
use crate::domain::value_objects::{AttorneyId, BlockHeight, Principal, SequenceCounter};
use crate::errors::RegistryError;
use crate::ports::inbound::AttorneyProfile;
use std::collections::{BTreeMap, HashMap};

/// The attorney-verification table.
///
/// Methods are synchronous and validate every precondition before the
/// first write; a rejected operation leaves the table untouched.
#[derive(Debug, Default)]
pub struct AttorneyRegistry {
    attorneys: BTreeMap<AttorneyId, Attorney>,
    by_principal: HashMap<Principal, AttorneyId>,
    ids: SequenceCounter,
}

impl AttorneyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attorneys: BTreeMap::new(),
            by_principal: HashMap::new(),
            ids: SequenceCounter::new(),
        }
    }

    /// Registers `caller` with status `pending` and a cleared verified
    /// flag. Fails with `AttorneyExists` if the principal already has a
    /// record.
    pub fn register(
        &mut self,
        caller: &Principal,
        profile: AttorneyProfile,
        height: BlockHeight,
    ) -> Result<AttorneyId, RegistryError> {
        if self.by_principal.contains_key(caller) {
            return Err(RegistryError::AttorneyExists(caller.clone()));
        }

        let id = AttorneyId::new(self.ids.allocate());
        self.attorneys.insert(
            id,
            Attorney {
                principal: caller.clone(),
                name: profile.name,
                specialization: profile.specialization,
                bar_number: profile.bar_number,
                status: AttorneyStatus::Pending,
                registration_date: height,
                verified: false,
            },
        );
        self.by_principal.insert(caller.clone(), id);
        Ok(id)
    }

    /// Sets an attorney's status. Only the contract owner may do this; the
    /// derived verified flag follows the new status.
    ///
    /// Both the `verify` and `update_status` entry points route here: they
    /// share the owner-only gate and differ only in intent.
    pub fn set_status(
        &mut self,
        caller: &Principal,
        contract_owner: &Principal,
        attorney_id: AttorneyId,
        status: AttorneyStatus,
    ) -> Result<bool, RegistryError> {
        if caller != contract_owner {
            return Err(RegistryError::Unauthorized);
        }
        let attorney = self
            .attorneys
            .get_mut(&attorney_id)
            .ok_or(RegistryError::AttorneyNotFound(attorney_id))?;
        attorney.set_status(status);
        Ok(true)
    }

    /// Returns the attorney record, if present.
    #[must_use]
    pub fn get(&self, attorney_id: AttorneyId) -> Option<&Attorney> {
        self.attorneys.get(&attorney_id)
    }

    /// Returns true iff the attorney exists and is verified. Absence is
    /// simply "not verified", never an error.
    #[must_use]
    pub fn is_verified(&self, attorney_id: AttorneyId) -> bool {
        self.attorneys
            .get(&attorney_id)
            .is_some_and(|a| a.verified)
    }

    /// Number of attorneys ever registered.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.ids.issued()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AttorneyProfile {
        AttorneyProfile {
            name: "John Doe".to_string(),
            specialization: "Patent Attorney".to_string(),
            bar_number: "BAR123456".to_string(),
        }
    }

    fn owner() -> Principal {
        Principal::new("deployer")
    }

    #[test]
    fn test_register_allocates_sequential_ids() {
        let mut registry = AttorneyRegistry::new();

        let first = registry
            .register(&Principal::new("attorney1"), profile(), BlockHeight::new(1000))
            .unwrap();
        let second = registry
            .register(&Principal::new("attorney2"), profile(), BlockHeight::new(1001))
            .unwrap();

        assert_eq!(first, AttorneyId::new(1));
        assert_eq!(second, AttorneyId::new(2));
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = AttorneyRegistry::new();
        let caller = Principal::new("attorney1");

        registry
            .register(&caller, profile(), BlockHeight::new(1000))
            .unwrap();
        let err = registry
            .register(&caller, profile(), BlockHeight::new(1001))
            .unwrap_err();

        assert_eq!(err.code(), 102);
        assert_eq!(registry.total(), 1); // Rejected call wrote nothing
    }

    #[test]
    fn test_new_attorney_is_pending_and_unverified() {
        let mut registry = AttorneyRegistry::new();
        let id = registry
            .register(&Principal::new("attorney1"), profile(), BlockHeight::new(1000))
            .unwrap();

        let attorney = registry.get(id).unwrap();
        assert_eq!(attorney.status, AttorneyStatus::Pending);
        assert!(!attorney.verified);
        assert_eq!(attorney.registration_date, BlockHeight::new(1000));
        assert!(!registry.is_verified(id));
    }

    #[test]
    fn test_owner_verifies_attorney() {
        let mut registry = AttorneyRegistry::new();
        let id = registry
            .register(&Principal::new("attorney1"), profile(), BlockHeight::new(1000))
            .unwrap();

        let ok = registry
            .set_status(&owner(), &owner(), id, AttorneyStatus::Verified)
            .unwrap();
        assert!(ok);
        assert!(registry.is_verified(id));

        // Any non-verified status clears the derived flag
        registry
            .set_status(&owner(), &owner(), id, AttorneyStatus::Suspended)
            .unwrap();
        assert!(!registry.is_verified(id));
        assert_eq!(registry.get(id).unwrap().status, AttorneyStatus::Suspended);
    }

    #[test]
    fn test_non_owner_cannot_set_status() {
        let mut registry = AttorneyRegistry::new();
        let caller = Principal::new("attorney1");
        let id = registry
            .register(&caller, profile(), BlockHeight::new(1000))
            .unwrap();

        // Not even the attorney themself
        let err = registry
            .set_status(&caller, &owner(), id, AttorneyStatus::Verified)
            .unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);
        assert_eq!(err.code(), 100);
        assert!(!registry.is_verified(id));
    }

    #[test]
    fn test_verify_unknown_attorney() {
        let mut registry = AttorneyRegistry::new();
        let err = registry
            .set_status(
                &owner(),
                &owner(),
                AttorneyId::new(99),
                AttorneyStatus::Verified,
            )
            .unwrap_err();
        assert_eq!(err.code(), 101);
    }

    #[test]
    fn test_absent_attorney_queries() {
        let registry = AttorneyRegistry::new();
        assert!(registry.get(AttorneyId::new(1)).is_none());
        assert!(!registry.is_verified(AttorneyId::new(1)));
        assert_eq!(registry.total(), 0);
    }
}

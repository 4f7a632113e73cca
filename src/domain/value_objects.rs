//! # Value Objects
//!
//! Immutable domain primitives for the dispute registry.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRINCIPAL
// =============================================================================

/// An opaque caller identity supplied by the surrounding ledger.
///
/// The registry never verifies signatures; it only compares principals it is
/// given against the principals stored on its records.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Creates a principal from its textual ledger representation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

// =============================================================================
// SEQUENTIAL IDENTIFIERS
// =============================================================================

/// Identifier of a registered attorney. Allocated sequentially from 1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttorneyId(pub u64);

/// Identifier of an infringement case. Allocated sequentially from 1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub u64);

/// Opaque reference to a patent in an external patent registry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatentId(pub u64);

macro_rules! impl_u64_id {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// Creates an identifier from its numeric value.
                #[must_use]
                pub const fn new(value: u64) -> Self {
                    Self(value)
                }

                /// Returns the numeric value.
                #[must_use]
                pub const fn value(&self) -> u64 {
                    self.0
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<u64> for $name {
                fn from(value: u64) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

impl_u64_id!(AttorneyId, CaseId, PatentId);

// =============================================================================
// BLOCK HEIGHT
// =============================================================================

/// Ledger height at which an operation was admitted.
///
/// All time-dependent fields (timestamps, evidence identifiers) are stamped
/// from this value as supplied by the execution environment at call time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// Creates a height from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHeight({})", self.0)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// =============================================================================
// EVIDENCE IDENTIFIER
// =============================================================================

/// Identifier of an evidence entry, derived from the submission height.
///
/// The identifier is a `(height, sequence)` pair: the sequence disambiguates
/// multiple submissions admitted at the same height, so identifiers are
/// unique across the whole ledger and their ordering matches submission
/// order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EvidenceId {
    /// Height at which the evidence was submitted.
    pub height: u64,
    /// Position among submissions at the same height.
    pub seq: u32,
}

impl EvidenceId {
    /// Creates an evidence identifier from a height and per-height sequence.
    #[must_use]
    pub const fn new(height: BlockHeight, seq: u32) -> Self {
        Self {
            height: height.value(),
            seq,
        }
    }
}

impl fmt::Debug for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvidenceId({}.{})", self.height, self.seq)
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.height, self.seq)
    }
}

// =============================================================================
// SEQUENCE COUNTER
// =============================================================================

/// Allocates strictly increasing identifiers starting at 1.
///
/// ## Invariants
/// - Identifiers are issued in increments of 1 with no gaps or reuse.
/// - The counter is owned by its registry and mutated only as part of the
///   serialized write for a creation operation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    /// Creates a counter whose first issued identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Issues the next identifier.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Returns how many identifiers have been issued so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// EVIDENCE SEQUENCER
// =============================================================================

/// Allocates evidence identifiers from submission heights.
///
/// Collisions at the same height are resolved with a per-height sequence
/// that resets only when the height advances. A height at or below the
/// last issued one keeps counting at the issued height, so identifiers
/// stay unique and ordered even if the source stalls or moves backward.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct EvidenceSequencer {
    last_height: u64,
    next_seq: u32,
}

impl EvidenceSequencer {
    /// Creates a sequencer with no submissions recorded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_height: 0,
            next_seq: 0,
        }
    }

    /// Issues the next evidence identifier for a submission at `height`.
    pub fn allocate(&mut self, height: BlockHeight) -> EvidenceId {
        if height.value() > self.last_height {
            self.last_height = height.value();
            self.next_seq = 0;
        }
        let id = EvidenceId::new(BlockHeight::new(self.last_height), self.next_seq);
        self.next_seq += 1;
        id
    }
}

// =============================================================================
// TESTS
// =============================================================================

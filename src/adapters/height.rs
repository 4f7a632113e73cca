//! # Height Source Adapter
//!
//! Manually advanced height source for testing. A production deployment
//! reads the surrounding ledger's height instead.

use crate::domain::value_objects::BlockHeight;
use crate::ports::outbound::HeightSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Height source advanced explicitly by tests.
#[derive(Debug)]
pub struct ManualHeight {
    height: AtomicU64,
}

impl ManualHeight {
    /// Creates a source positioned at `height`.
    #[must_use]
    pub fn new(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Moves the source to an absolute height.
    pub fn set(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    /// Advances the source by `blocks`.
    pub fn advance(&self, blocks: u64) {
        self.height.fetch_add(blocks, Ordering::SeqCst);
    }
}

impl HeightSource for ManualHeight {
    fn current_height(&self) -> BlockHeight {
        BlockHeight::new(self.height.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_advance() {
        let source = ManualHeight::new(1000);
        assert_eq!(source.current_height(), BlockHeight::new(1000));

        source.advance(5);
        assert_eq!(source.current_height(), BlockHeight::new(1005));

        source.set(2000);
        assert_eq!(source.current_height(), BlockHeight::new(2000));
    }
}

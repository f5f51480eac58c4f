//! Test utilities for binmatrix unit tests.
//!
//! Provides universe builders, an instantiator that fails on demand, and
//! manifest fixtures that can be written to a temporary directory.

pub mod fixtures;

use std::cell::Cell;

use crate::builder::instantiator::{
    BinaryArgs, DefaultInstantiator, InstantiationError, Instantiator,
};
use crate::core::axis::{BuildType, Flavor, Platform, Universes};
use crate::core::binary::{BinaryKind, PrebuiltLibraryBinary};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Build universes from plain names.
pub fn universes(platforms: &[&str], build_types: &[&str], flavors: &[&str]) -> Universes {
    Universes::new(
        platforms.iter().map(|n| Platform::new(*n)),
        build_types.iter().map(|n| BuildType::new(*n)),
        flavors.iter().map(|n| Flavor::new(*n)),
    )
}

/// Instantiator that succeeds a fixed number of times, then fails.
#[derive(Debug, Default)]
pub struct FailingInstantiator {
    remaining: Cell<usize>,
}

impl FailingInstantiator {
    /// Succeed `successes` times, fail on every call after that.
    pub fn after(successes: usize) -> Self {
        FailingInstantiator {
            remaining: Cell::new(successes),
        }
    }
}

impl Instantiator for FailingInstantiator {
    fn new_binary(
        &self,
        kind: BinaryKind,
        args: BinaryArgs<'_>,
    ) -> Result<PrebuiltLibraryBinary, InstantiationError> {
        match self.remaining.get() {
            0 => Err(InstantiationError::new(kind, &args, "injected failure")),
            n => {
                self.remaining.set(n - 1);
                DefaultInstantiator.new_binary(kind, args)
            }
        }
    }
}

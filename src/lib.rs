//! binmatrix - Prebuilt native library variant matrices
//!
//! This crate expands prebuilt libraries across platforms, build types and
//! flavors, creating one API, shared and static binary per applicable
//! variant with a deterministic name.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for binmatrix unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides universe builders, a failing instantiator and manifest fixtures.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildError, PrebuiltBinaryFactory};
pub use core::{
    binary::PrebuiltLibraryBinary, component::NativeComponent, component::PrebuiltLibrary,
    manifest::Manifest, naming::BinaryNamingScheme,
};
pub use util::context::GlobalContext;

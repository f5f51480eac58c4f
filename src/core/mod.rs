//! Core data structures for binmatrix.
//!
//! This module contains the foundational types used throughout binmatrix:
//! - Axis values and universes (platforms, build types, flavors)
//! - Components and their variant restrictions
//! - Binary records and naming schemes
//! - The Variants.toml manifest

pub mod axis;
pub mod binary;
pub mod component;
pub mod manifest;
pub mod naming;

pub use axis::{AxisSet, AxisValue, BuildType, Flavor, Platform, Universes};
pub use binary::{BinaryCollection, BinaryKind, PrebuiltLibraryBinary};
pub use component::{LibraryRestrictions, NativeComponent, PrebuiltLibrary};
pub use manifest::{find_manifest, Manifest, ManifestError, MANIFEST_NAME};
pub use naming::BinaryNamingScheme;

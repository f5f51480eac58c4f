//! Binary instantiation.
//!
//! The factory decides *which* binaries exist; an [`Instantiator`] turns a
//! kind plus constructor arguments into the actual record. Hosts that need
//! to attach extra state (or refuse certain variants) plug in their own.

use thiserror::Error;

use crate::core::axis::{BuildType, Flavor, Platform};
use crate::core::binary::{BinaryKind, PrebuiltLibraryBinary};
use crate::core::naming::BinaryNamingScheme;

/// Constructor arguments for a binary.
#[derive(Debug, Clone, Copy)]
pub struct BinaryArgs<'a> {
    pub naming_scheme: &'a BinaryNamingScheme,
    pub component: &'a str,
    pub build_type: &'a BuildType,
    pub platform: &'a Platform,
    pub flavor: &'a Flavor,
}

/// Failure to create a binary record.
#[derive(Debug, Error)]
#[error("could not create {kind} binary `{name}`: {reason}")]
pub struct InstantiationError {
    pub kind: BinaryKind,
    pub name: String,
    pub reason: String,
}

impl InstantiationError {
    pub fn new(kind: BinaryKind, args: &BinaryArgs<'_>, reason: impl Into<String>) -> Self {
        InstantiationError {
            kind,
            name: args.naming_scheme.name(),
            reason: reason.into(),
        }
    }
}

/// Creates binary records from a kind and constructor arguments.
pub trait Instantiator {
    fn new_binary(
        &self,
        kind: BinaryKind,
        args: BinaryArgs<'_>,
    ) -> Result<PrebuiltLibraryBinary, InstantiationError>;
}

/// Instantiator that builds plain records and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInstantiator;

impl Instantiator for DefaultInstantiator {
    fn new_binary(
        &self,
        kind: BinaryKind,
        args: BinaryArgs<'_>,
    ) -> Result<PrebuiltLibraryBinary, InstantiationError> {
        Ok(PrebuiltLibraryBinary {
            kind,
            naming_scheme: args.naming_scheme.clone(),
            component: args.component.to_string(),
            build_type: args.build_type.clone(),
            platform: args.platform.clone(),
            flavor: args.flavor.clone(),
        })
    }
}

impl<I: Instantiator + ?Sized> Instantiator for &I {
    fn new_binary(
        &self,
        kind: BinaryKind,
        args: BinaryArgs<'_>,
    ) -> Result<PrebuiltLibraryBinary, InstantiationError> {
        (**self).new_binary(kind, args)
    }
}

//! Prebuilt binary creation.
//!
//! The factory enumerates a component's variant matrix (platform outer,
//! build type middle, flavor inner) and creates one API, one shared and one
//! static binary per variant, appending them to the component in that order.
//!
//! Creation is not idempotent: running it twice on the same component adds
//! every binary twice. Call it once per component.

use crate::builder::errors::BuildError;
use crate::builder::instantiator::{
    BinaryArgs, DefaultInstantiator, InstantiationError, Instantiator,
};
use crate::builder::selector::VariantSelection;
use crate::core::axis::{BuildType, Flavor, Platform, Universes};
use crate::core::binary::BinaryKind;
use crate::core::component::NativeComponent;
use crate::core::naming::BinaryNamingScheme;

/// Creates the binaries of prebuilt components against fixed universes.
#[derive(Debug, Clone)]
pub struct PrebuiltBinaryFactory<I = DefaultInstantiator> {
    instantiator: I,
    universes: Universes,
}

impl PrebuiltBinaryFactory<DefaultInstantiator> {
    /// Create a factory using the [`DefaultInstantiator`].
    pub fn with_default_instantiator(universes: Universes) -> Self {
        Self::new(DefaultInstantiator, universes)
    }
}

impl<I: Instantiator> PrebuiltBinaryFactory<I> {
    pub fn new(instantiator: I, universes: Universes) -> Self {
        PrebuiltBinaryFactory {
            instantiator,
            universes,
        }
    }

    pub fn universes(&self) -> &Universes {
        &self.universes
    }

    /// Create every binary of `component`.
    ///
    /// Returns the number of binaries appended. On failure, binaries
    /// appended before the failing one stay in the component.
    pub fn create_binaries<C: NativeComponent + ?Sized>(
        &self,
        component: &mut C,
    ) -> Result<usize, BuildError> {
        let selection = VariantSelection::select(component, &self.universes);
        self.create_selected_binaries(component, &selection)
    }

    /// Create every binary of `component` for a selection already made
    /// against this factory's universes.
    pub fn create_selected_binaries<C: NativeComponent + ?Sized>(
        &self,
        component: &mut C,
        selection: &VariantSelection,
    ) -> Result<usize, BuildError> {
        let before = component.binaries().len();

        tracing::debug!(
            "Creating {} variants of `{}`",
            selection.variant_count(),
            component.name()
        );

        for platform in &selection.platforms {
            for build_type in &selection.build_types {
                for flavor in &selection.flavors {
                    self.create_variant(component, selection, platform, build_type, flavor)
                        .map_err(|source| failed(&*component, before, source))?;
                }
            }
        }

        Ok(component.binaries().len() - before)
    }

    /// Create the three binaries of a single variant of `component`.
    pub fn create_binaries_for_point<C: NativeComponent + ?Sized>(
        &self,
        component: &mut C,
        platform: &Platform,
        build_type: &BuildType,
        flavor: &Flavor,
    ) -> Result<(), BuildError> {
        let selection = VariantSelection::select(component, &self.universes);
        let before = component.binaries().len();

        self.create_variant(component, &selection, platform, build_type, flavor)
            .map_err(|source| failed(&*component, before, source))
    }

    /// Create one binary of the given kind and append it to `component`.
    pub fn create_binary<C: NativeComponent + ?Sized>(
        &self,
        kind: BinaryKind,
        component: &mut C,
        naming_scheme: &BinaryNamingScheme,
        platform: &Platform,
        build_type: &BuildType,
        flavor: &Flavor,
    ) -> Result<(), BuildError> {
        let before = component.binaries().len();

        self.instantiate(kind, component, naming_scheme, platform, build_type, flavor)
            .map_err(|source| failed(&*component, before, source))
    }

    fn create_variant<C: NativeComponent + ?Sized>(
        &self,
        component: &mut C,
        selection: &VariantSelection,
        platform: &Platform,
        build_type: &BuildType,
        flavor: &Flavor,
    ) -> Result<(), InstantiationError> {
        let naming_scheme = selection.naming_scheme(component.name(), platform, build_type, flavor);

        for kind in BinaryKind::ALL {
            self.instantiate(kind, component, &naming_scheme, platform, build_type, flavor)?;
        }
        Ok(())
    }

    fn instantiate<C: NativeComponent + ?Sized>(
        &self,
        kind: BinaryKind,
        component: &mut C,
        naming_scheme: &BinaryNamingScheme,
        platform: &Platform,
        build_type: &BuildType,
        flavor: &Flavor,
    ) -> Result<(), InstantiationError> {
        let binary = self.instantiator.new_binary(
            kind,
            BinaryArgs {
                naming_scheme,
                component: component.name(),
                build_type,
                platform,
                flavor,
            },
        )?;

        tracing::debug!("Created {}", binary.description());
        component.binaries_mut().add(binary);
        Ok(())
    }
}

fn failed<C: NativeComponent + ?Sized>(
    component: &C,
    before: usize,
    source: InstantiationError,
) -> BuildError {
    BuildError::Instantiation {
        component: component.name().to_string(),
        created: component.binaries().len() - before,
        source,
    }
}

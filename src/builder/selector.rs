//! Variant selection and naming.
//!
//! A [`VariantSelection`] is what a component picked out of each universe.
//! Naming is derived from it: an axis contributes a name dimension only when
//! the component's own selection on that axis has more than one value.

use serde::Serialize;

use crate::core::axis::{AxisSet, AxisValue, BuildType, Flavor, Platform, Universes};
use crate::core::component::NativeComponent;
use crate::core::naming::BinaryNamingScheme;

/// The axis values a component applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSelection {
    pub platforms: AxisSet<Platform>,
    pub build_types: AxisSet<BuildType>,
    pub flavors: AxisSet<Flavor>,
}

impl VariantSelection {
    /// Ask `component` to choose from each universe. Every axis is queried
    /// once, independently of the others.
    pub fn select<C: NativeComponent + ?Sized>(component: &C, universes: &Universes) -> Self {
        VariantSelection {
            platforms: component.choose_platforms(universes.platforms()),
            build_types: component.choose_build_types(universes.build_types()),
            flavors: component.choose_flavors(universes.flavors()),
        }
    }

    /// Number of variants: the size of the platform x build type x flavor
    /// product.
    pub fn variant_count(&self) -> usize {
        self.platforms.len() * self.build_types.len() * self.flavors.len()
    }

    /// Whether the selection yields no variants at all.
    pub fn is_empty(&self) -> bool {
        self.variant_count() == 0
    }

    pub fn uses_platform_dimension(&self) -> bool {
        varies(&self.platforms)
    }

    pub fn uses_build_type_dimension(&self) -> bool {
        varies(&self.build_types)
    }

    pub fn uses_flavor_dimension(&self) -> bool {
        varies(&self.flavors)
    }

    /// Naming scheme for the variant at (`platform`, `build_type`, `flavor`).
    ///
    /// Dimensions are always considered in the order platform, build type,
    /// flavor.
    pub fn naming_scheme(
        &self,
        base_name: &str,
        platform: &Platform,
        build_type: &BuildType,
        flavor: &Flavor,
    ) -> BinaryNamingScheme {
        let scheme = BinaryNamingScheme::new(base_name);
        let scheme = with_dimension(scheme, &self.platforms, platform);
        let scheme = with_dimension(scheme, &self.build_types, build_type);
        with_dimension(scheme, &self.flavors, flavor)
    }
}

fn varies<T: AxisValue>(selected: &AxisSet<T>) -> bool {
    selected.len() > 1
}

fn with_dimension<T: AxisValue>(
    scheme: BinaryNamingScheme,
    selected: &AxisSet<T>,
    value: &T,
) -> BinaryNamingScheme {
    if varies(selected) {
        scheme.with_variant_dimension(value.name())
    } else {
        scheme
    }
}

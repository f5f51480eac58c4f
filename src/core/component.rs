//! Native components and their variant restrictions.
//!
//! A component decides which platforms, build types and flavors it applies
//! to. It never owns the axis values; it picks among the candidates it is
//! handed.

use serde::{Deserialize, Serialize};

use crate::core::axis::{AxisSet, AxisValue, BuildType, Flavor, Platform};
use crate::core::binary::BinaryCollection;

/// A component that can have binaries created for it.
pub trait NativeComponent {
    /// Component name, used as the base of every binary name.
    fn name(&self) -> &str;

    /// The platforms out of `candidates` this component applies to.
    fn choose_platforms(&self, candidates: &AxisSet<Platform>) -> AxisSet<Platform>;

    /// The build types out of `candidates` this component applies to.
    fn choose_build_types(&self, candidates: &AxisSet<BuildType>) -> AxisSet<BuildType>;

    /// The flavors out of `candidates` this component applies to.
    fn choose_flavors(&self, candidates: &AxisSet<Flavor>) -> AxisSet<Flavor>;

    /// Binaries created so far.
    fn binaries(&self) -> &BinaryCollection;

    /// Mutation handle for appending binaries.
    fn binaries_mut(&mut self) -> &mut BinaryCollection;
}

/// Names a component restricts one axis to.
///
/// `None` means "no restriction": every candidate applies.
pub type Restriction = Option<Vec<String>>;

/// A library whose binaries already exist on disk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrebuiltLibrary {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    target_platforms: Restriction,

    #[serde(skip_serializing_if = "Option::is_none")]
    target_build_types: Restriction,

    #[serde(skip_serializing_if = "Option::is_none")]
    target_flavors: Restriction,

    binaries: BinaryCollection,
}

impl PrebuiltLibrary {
    /// Create a library that applies to every variant.
    pub fn new(name: impl Into<String>) -> Self {
        PrebuiltLibrary {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Restrict the library to the named platforms.
    pub fn target_platforms(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target_platforms = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the library to the named build types.
    pub fn target_build_types(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.target_build_types = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the library to the named flavors.
    pub fn target_flavors(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target_flavors = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Apply restrictions from a declaration, leaving unset axes unrestricted.
    pub fn with_restrictions(mut self, restrictions: &LibraryRestrictions) -> Self {
        self.target_platforms = restrictions.platforms.clone();
        self.target_build_types = restrictions.build_types.clone();
        self.target_flavors = restrictions.flavors.clone();
        self
    }
}

/// Per-axis restrictions as declared in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRestrictions {
    #[serde(default)]
    pub platforms: Restriction,

    #[serde(default)]
    pub build_types: Restriction,

    #[serde(default)]
    pub flavors: Restriction,
}

/// Pick the candidates named by `restriction`, in candidate order.
fn choose<T: AxisValue>(
    component: &str,
    axis: &str,
    candidates: &AxisSet<T>,
    restriction: &Restriction,
) -> AxisSet<T> {
    let Some(names) = restriction else {
        return candidates.clone();
    };

    for name in names {
        if !candidates.contains(name) {
            tracing::warn!(
                "{} `{}` targeted by `{}` is not declared, ignoring",
                axis,
                name,
                component
            );
        }
    }

    candidates.filter(|value| names.iter().any(|n| n == value.name()))
}

impl NativeComponent for PrebuiltLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_platforms(&self, candidates: &AxisSet<Platform>) -> AxisSet<Platform> {
        choose(&self.name, "platform", candidates, &self.target_platforms)
    }

    fn choose_build_types(&self, candidates: &AxisSet<BuildType>) -> AxisSet<BuildType> {
        choose(&self.name, "build type", candidates, &self.target_build_types)
    }

    fn choose_flavors(&self, candidates: &AxisSet<Flavor>) -> AxisSet<Flavor> {
        choose(&self.name, "flavor", candidates, &self.target_flavors)
    }

    fn binaries(&self) -> &BinaryCollection {
        &self.binaries
    }

    fn binaries_mut(&mut self) -> &mut BinaryCollection {
        &mut self.binaries
    }
}

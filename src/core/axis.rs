//! Variant axes - the values a prebuilt library can vary over.
//!
//! There are three independent axes: platform, build type and flavor.
//! Each axis value is identified by its name; two values with the same name
//! are the same value as far as variant selection and naming are concerned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value on one of the variant axes.
pub trait AxisValue: Clone + fmt::Debug {
    /// Identity and display name of this value.
    fn name(&self) -> &str;
}

/// A target platform (e.g. `x86`, `linux-arm64`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Platform name
    pub name: String,

    /// CPU architecture, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,

    /// Operating system, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
}

impl Platform {
    /// Create a platform with no architecture or OS information.
    pub fn new(name: impl Into<String>) -> Self {
        Platform {
            name: name.into(),
            architecture: None,
            operating_system: None,
        }
    }

    /// The platform of the running host, named `current`.
    pub fn current() -> Self {
        Platform::new("current")
            .with_architecture(std::env::consts::ARCH)
            .with_operating_system(std::env::consts::OS)
    }

    /// Set the architecture.
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Set the operating system.
    pub fn with_operating_system(mut self, os: impl Into<String>) -> Self {
        self.operating_system = Some(os.into());
        self
    }
}

impl AxisValue for Platform {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A build type (e.g. `debug`, `release`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildType {
    pub name: String,
}

impl BuildType {
    pub fn new(name: impl Into<String>) -> Self {
        BuildType { name: name.into() }
    }
}

impl Default for BuildType {
    fn default() -> Self {
        BuildType::new("debug")
    }
}

impl AxisValue for BuildType {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A flavor - an arbitrary user-defined variant (e.g. `free`, `paid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flavor {
    pub name: String,
}

impl Flavor {
    pub fn new(name: impl Into<String>) -> Self {
        Flavor { name: name.into() }
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Flavor::new("default")
    }
}

impl AxisValue for Flavor {
    fn name(&self) -> &str {
        &self.name
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.name)
                }
            }
        )*
    };
}

impl_display_by_name!(Platform, BuildType, Flavor);

/// An ordered set of axis values, unique by name.
///
/// Iteration follows the order of first insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AxisSet<T> {
    values: Vec<T>,
}

impl<T: AxisValue> AxisSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        AxisSet { values: Vec::new() }
    }

    /// Insert a value. Returns `false` if a value with the same name is
    /// already present, in which case the set is unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(value.name()) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Check whether a value with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name() == name)
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.values.iter().find(|v| v.name() == name)
    }

    /// Values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The subset of this set whose names satisfy `keep`, in this set's order.
    pub fn filter(&self, mut keep: impl FnMut(&T) -> bool) -> Self {
        AxisSet {
            values: self.values.iter().filter(|v| keep(v)).cloned().collect(),
        }
    }
}

impl<T: AxisValue> Default for AxisSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AxisValue> FromIterator<T> for AxisSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AxisSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a AxisSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// The full known values of all three axes.
///
/// Universes are fixed once constructed; duplicate names within an axis are
/// collapsed, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Universes {
    platforms: AxisSet<Platform>,
    build_types: AxisSet<BuildType>,
    flavors: AxisSet<Flavor>,
}

impl Universes {
    /// Build universes from arbitrary collections.
    pub fn new(
        platforms: impl IntoIterator<Item = Platform>,
        build_types: impl IntoIterator<Item = BuildType>,
        flavors: impl IntoIterator<Item = Flavor>,
    ) -> Self {
        Universes {
            platforms: dedup("platform", platforms),
            build_types: dedup("build type", build_types),
            flavors: dedup("flavor", flavors),
        }
    }

    pub fn platforms(&self) -> &AxisSet<Platform> {
        &self.platforms
    }

    pub fn build_types(&self) -> &AxisSet<BuildType> {
        &self.build_types
    }

    pub fn flavors(&self) -> &AxisSet<Flavor> {
        &self.flavors
    }
}

fn dedup<T: AxisValue>(axis: &str, values: impl IntoIterator<Item = T>) -> AxisSet<T> {
    let mut set = AxisSet::new();
    for value in values {
        let name = value.name().to_string();
        if !set.insert(value) {
            tracing::warn!("ignoring duplicate {} `{}`", axis, name);
        }
    }
    set
}

//! Prebuilt library binaries - one per variant of a library.
//!
//! Every point of a library's variant matrix yields three binaries: the
//! API (headers only), the shared library and the static library.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::axis::{BuildType, Flavor, Platform};
use crate::core::naming::BinaryNamingScheme;

/// The kind of prebuilt library binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryKind {
    /// Headers only, nothing to link
    #[serde(alias = "headers")]
    Api,

    /// Shared/dynamic library (.so / .dylib / .dll)
    #[serde(alias = "dylib", alias = "dynamic")]
    Shared,

    /// Static library (.a / .lib)
    #[serde(alias = "staticlib")]
    Static,
}

impl BinaryKind {
    /// All kinds, in the order binaries are created for each variant.
    pub const ALL: [BinaryKind; 3] = [BinaryKind::Api, BinaryKind::Shared, BinaryKind::Static];

    /// Suffix used in display and task names.
    pub fn type_string(&self) -> &'static str {
        match self {
            BinaryKind::Api => "ApiLibrary",
            BinaryKind::Shared => "SharedLibrary",
            BinaryKind::Static => "StaticLibrary",
        }
    }

    /// Human-readable kind, e.g. `shared library`.
    pub fn description(&self) -> &'static str {
        match self {
            BinaryKind::Api => "api library",
            BinaryKind::Shared => "shared library",
            BinaryKind::Static => "static library",
        }
    }

    /// Get the typical file extension for this kind.
    pub fn extension(&self, os: &str) -> &'static str {
        match self {
            BinaryKind::Api => "",
            BinaryKind::Static => {
                if os == "windows" {
                    "lib"
                } else {
                    "a"
                }
            }
            BinaryKind::Shared => match os {
                "windows" => "dll",
                "macos" => "dylib",
                _ => "so",
            },
        }
    }

    /// Get the typical file prefix for this kind.
    pub fn prefix(&self, os: &str) -> &'static str {
        match self {
            BinaryKind::Api => "",
            BinaryKind::Static | BinaryKind::Shared => {
                if os == "windows" {
                    ""
                } else {
                    "lib"
                }
            }
        }
    }

    /// Expected library file name, or `None` for the API kind which has no
    /// file of its own.
    pub fn output_filename(&self, name: &str, os: &str) -> Option<String> {
        match self {
            BinaryKind::Api => None,
            _ => Some(format!("{}{}.{}", self.prefix(os), name, self.extension(os))),
        }
    }

}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryKind::Api => write!(f, "api"),
            BinaryKind::Shared => write!(f, "shared"),
            BinaryKind::Static => write!(f, "static"),
        }
    }
}

/// A single prebuilt library binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrebuiltLibraryBinary {
    /// Binary kind
    pub kind: BinaryKind,

    /// Naming identity, shared by all kinds at the same variant
    pub naming_scheme: BinaryNamingScheme,

    /// Name of the owning component
    pub component: String,

    pub build_type: BuildType,
    pub platform: Platform,
    pub flavor: Flavor,
}

impl PrebuiltLibraryBinary {
    /// Unique name of this binary, e.g. `helloDebugSharedLibrary`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.naming_scheme.name(), self.kind.type_string())
    }

    /// Human-readable description, e.g. `shared library 'hello:debug'`.
    pub fn description(&self) -> String {
        let mut id = self.naming_scheme.base_name().to_string();
        for dimension in self.naming_scheme.dimensions() {
            id.push(':');
            id.push_str(dimension);
        }
        format!("{} '{}'", self.kind.description(), id)
    }

    /// Expected library file name on this binary's platform.
    ///
    /// Platforms without an operating system are treated as the host.
    pub fn output_filename(&self) -> Option<String> {
        let os = self
            .platform
            .operating_system
            .as_deref()
            .unwrap_or(std::env::consts::OS);
        self.kind.output_filename(&self.component, os)
    }
}

/// The ordered, append-only set of binaries owned by a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BinaryCollection {
    binaries: Vec<PrebuiltLibraryBinary>,
}

impl BinaryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binary. Existing entries are never removed or reordered.
    pub fn add(&mut self, binary: PrebuiltLibraryBinary) {
        self.binaries.push(binary);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrebuiltLibraryBinary> {
        self.binaries.iter()
    }

    pub fn len(&self) -> usize {
        self.binaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binaries.is_empty()
    }

    /// Find a binary by its display name.
    pub fn get(&self, display_name: &str) -> Option<&PrebuiltLibraryBinary> {
        self.binaries
            .iter()
            .find(|b| b.display_name() == display_name)
    }

    /// Binaries of one kind, in collection order.
    pub fn of_kind(&self, kind: BinaryKind) -> impl Iterator<Item = &PrebuiltLibraryBinary> {
        self.binaries.iter().filter(move |b| b.kind == kind)
    }
}

impl<'a> IntoIterator for &'a BinaryCollection {
    type Item = &'a PrebuiltLibraryBinary;
    type IntoIter = std::slice::Iter<'a, PrebuiltLibraryBinary>;

    fn into_iter(self) -> Self::IntoIter {
        self.binaries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(kind: BinaryKind, scheme: BinaryNamingScheme) -> PrebuiltLibraryBinary {
        PrebuiltLibraryBinary {
            kind,
            naming_scheme: scheme,
            component: "hello".to_string(),
            build_type: BuildType::new("debug"),
            platform: Platform::new("x86").with_operating_system("linux"),
            flavor: Flavor::default(),
        }
    }

    #[test]
    fn test_binary_kind_extensions() {
        assert_eq!(BinaryKind::Api.extension("linux"), "");
        assert_eq!(BinaryKind::Static.extension("linux"), "a");
        assert_eq!(BinaryKind::Static.extension("windows"), "lib");
        assert_eq!(BinaryKind::Shared.extension("linux"), "so");
        assert_eq!(BinaryKind::Shared.extension("macos"), "dylib");
        assert_eq!(BinaryKind::Shared.extension("windows"), "dll");
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(BinaryKind::Api.output_filename("hello", "linux"), None);
        assert_eq!(
            BinaryKind::Static.output_filename("hello", "linux").as_deref(),
            Some("libhello.a")
        );
        assert_eq!(
            BinaryKind::Shared.output_filename("hello", "windows").as_deref(),
            Some("hello.dll")
        );
    }

    #[test]
    fn test_display_name_and_description() {
        let scheme = BinaryNamingScheme::new("hello").with_variant_dimension("debug");
        let shared = binary(BinaryKind::Shared, scheme.clone());
        let api = binary(BinaryKind::Api, scheme);

        assert_eq!(shared.display_name(), "helloDebugSharedLibrary");
        assert_eq!(api.display_name(), "helloDebugApiLibrary");
        assert_eq!(shared.description(), "shared library 'hello:debug'");
        assert_eq!(shared.output_filename().as_deref(), Some("libhello.so"));
    }

    #[test]
    fn test_collection_is_ordered() {
        let scheme = BinaryNamingScheme::new("hello");
        let mut binaries = BinaryCollection::new();
        for kind in BinaryKind::ALL {
            binaries.add(binary(kind, scheme.clone()));
        }

        let kinds: Vec<_> = binaries.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, BinaryKind::ALL);
        assert_eq!(binaries.of_kind(BinaryKind::Static).count(), 1);
        assert!(binaries.get("helloSharedLibrary").is_some());
    }
}

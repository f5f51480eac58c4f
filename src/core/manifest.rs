//! Variants.toml parsing.
//!
//! The manifest declares the known platforms, build types and flavors, and
//! the prebuilt libraries that pick among them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use miette::NamedSource;
use serde::Deserialize;
use thiserror::Error;

use crate::core::axis::{BuildType, Flavor, Platform, Universes};
use crate::core::component::{LibraryRestrictions, PrebuiltLibrary};
use crate::util::diagnostic::ManifestParseError;

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Variants.toml";

/// Errors locating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find `{}` in `{}` or any parent directory", MANIFEST_NAME, dir.display())]
    NotFound { dir: PathBuf },
}

/// Look for a manifest directly inside `dir`.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = dir.join(MANIFEST_NAME);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ManifestError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    platforms: Vec<Platform>,

    #[serde(default)]
    build_types: Vec<BuildType>,

    #[serde(default)]
    flavors: Vec<Flavor>,

    #[serde(default)]
    libraries: BTreeMap<String, LibraryRestrictions>,
}

/// A parsed Variants.toml.
#[derive(Debug, Clone)]
pub struct Manifest {
    universes: Universes,
    libraries: BTreeMap<String, LibraryRestrictions>,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Ok(Self::parse(&contents, &path.display().to_string())?)
    }

    /// Parse manifest contents. `source_name` is used in diagnostics.
    pub fn parse(contents: &str, source_name: &str) -> Result<Self, ManifestParseError> {
        let raw: RawManifest = toml::from_str(contents).map_err(|e| ManifestParseError {
            path: source_name.to_string(),
            message: e.message().to_string(),
            src: NamedSource::new(source_name, contents.to_string()),
            span: e.span().map(Into::into),
        })?;

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawManifest) -> Self {
        let platforms = if raw.platforms.is_empty() {
            vec![Platform::current()]
        } else {
            raw.platforms
        };
        let build_types = if raw.build_types.is_empty() {
            vec![BuildType::default()]
        } else {
            raw.build_types
        };
        let flavors = if raw.flavors.is_empty() {
            vec![Flavor::default()]
        } else {
            raw.flavors
        };

        Manifest {
            universes: Universes::new(platforms, build_types, flavors),
            libraries: raw.libraries,
        }
    }

    /// The declared (or defaulted) axis universes.
    pub fn universes(&self) -> &Universes {
        &self.universes
    }

    /// Names of all declared libraries, sorted.
    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    /// Create a fresh component for a declared library.
    pub fn library(&self, name: &str) -> Option<PrebuiltLibrary> {
        self.libraries
            .get(name)
            .map(|restrictions| PrebuiltLibrary::new(name).with_restrictions(restrictions))
    }

    /// Create fresh components for every declared library, in name order.
    pub fn libraries(&self) -> Vec<PrebuiltLibrary> {
        self.libraries
            .iter()
            .map(|(name, restrictions)| PrebuiltLibrary::new(name).with_restrictions(restrictions))
            .collect()
    }
}

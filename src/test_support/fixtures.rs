//! Test fixtures for common test scenarios.

use std::path::{Path, PathBuf};

use crate::core::manifest::MANIFEST_NAME;

/// Fixture for a project directory containing a Variants.toml.
#[derive(Debug, Clone)]
pub struct ManifestFixture {
    /// Project directory name.
    pub name: String,
    /// Variants.toml content.
    pub manifest: String,
}

impl ManifestFixture {
    /// Create a fixture with an empty manifest.
    pub fn new(name: impl Into<String>) -> Self {
        ManifestFixture {
            name: name.into(),
            manifest: String::new(),
        }
    }

    /// Two platforms, two build types, one flavor and two libraries: `hello`
    /// (unrestricted) and `zlib` (x86 release only).
    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name).with_manifest(
            r#"[[platforms]]
name = "x86"
operating_system = "linux"

[[platforms]]
name = "arm64"
operating_system = "linux"

[[build_types]]
name = "debug"

[[build_types]]
name = "release"

[[flavors]]
name = "default"

[libraries.hello]

[libraries.zlib]
platforms = ["x86"]
build_types = ["release"]
"#,
        )
    }

    /// Set the manifest content.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Write this fixture to a real directory, returning the project path.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let project_path = base_path.join(&self.name);
        std::fs::create_dir_all(&project_path)?;
        std::fs::write(project_path.join(MANIFEST_NAME), &self.manifest)?;
        Ok(project_path)
    }
}

//! Variant event types for JSON output.
//!
//! These events are emitted when using `--message-format=json`, one JSON
//! object per line.
//!
//! # Event Types
//!
//! - `binary-created`: A binary was added to a library
//! - `library-finished`: All binaries of a library were created
//! - `resolve-finished`: Every requested library was processed
//!
//! # Stability
//!
//! New fields may be added, but existing fields should not be removed or renamed.

use serde::{Deserialize, Serialize};

use crate::core::binary::{BinaryKind, PrebuiltLibraryBinary};

/// A variant event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason")]
pub enum VariantEvent {
    /// A binary was created.
    #[serde(rename = "binary-created")]
    BinaryCreated {
        /// Owning library
        library: String,
        /// Unique binary name (e.g. "helloDebugSharedLibrary")
        name: String,
        /// Binary kind
        kind: BinaryKind,
        /// Naming-scheme name shared by all kinds of this variant
        variant: String,
        platform: String,
        build_type: String,
        flavor: String,
        /// Expected library file name (absent for API binaries)
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },

    /// All binaries of a library were created.
    #[serde(rename = "library-finished")]
    LibraryFinished {
        library: String,
        /// Number of binaries created
        binaries: u64,
        /// Axes contributing a name dimension, in naming order
        dimensions: Vec<String>,
    },

    /// Resolution completed.
    #[serde(rename = "resolve-finished")]
    ResolveFinished {
        /// Whether every library was processed successfully
        success: bool,
        /// Number of libraries processed
        libraries: u64,
        /// Total binaries created
        binaries: u64,
        /// Duration in milliseconds
        duration_ms: u64,
    },
}

impl VariantEvent {
    /// Create a binary created event.
    pub fn binary(binary: &PrebuiltLibraryBinary) -> Self {
        VariantEvent::BinaryCreated {
            library: binary.component.clone(),
            name: binary.display_name(),
            kind: binary.kind,
            variant: binary.naming_scheme.name(),
            platform: binary.platform.name.clone(),
            build_type: binary.build_type.name.clone(),
            flavor: binary.flavor.name.clone(),
            filename: binary.output_filename(),
        }
    }

    /// Create a library finished event.
    pub fn library_finished(
        library: impl Into<String>,
        binaries: u64,
        dimensions: Vec<String>,
    ) -> Self {
        VariantEvent::LibraryFinished {
            library: library.into(),
            binaries,
            dimensions,
        }
    }

    /// Create a resolve finished event.
    pub fn finished(success: bool, libraries: u64, binaries: u64, duration_ms: u64) -> Self {
        VariantEvent::ResolveFinished {
            success,
            libraries,
            binaries,
            duration_ms,
        }
    }

    /// Serialize this event to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Output format for variant listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON lines
    Json,
}

impl std::str::FromStr for MessageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(MessageFormat::Human),
            "json" => Ok(MessageFormat::Json),
            _ => Err(format!(
                "invalid message format '{}', expected 'human' or 'json'",
                s
            )),
        }
    }
}

//! Variant resolution operations.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::builder::{PrebuiltBinaryFactory, VariantSelection};
use crate::core::axis::AxisValue;
use crate::core::binary::BinaryCollection;
use crate::core::component::{NativeComponent, PrebuiltLibrary};
use crate::core::manifest::Manifest;
use crate::util::diagnostic::LibraryNotFoundError;

/// Options for variant resolution.
#[derive(Debug, Clone, Default)]
pub struct VariantOptions {
    /// Libraries to resolve (empty = all declared libraries)
    pub libraries: Vec<String>,
}

/// The resolved variants of one library.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryVariants {
    pub name: String,
    pub selection: VariantSelection,
    /// Axes contributing a name dimension, in naming order
    pub dimensions: Vec<String>,
    pub binaries: BinaryCollection,
}

impl LibraryVariants {
    /// Distinct variant names (naming-scheme names), in creation order.
    pub fn variant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for binary in &self.binaries {
            let name = binary.naming_scheme.name();
            if names.last() != Some(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Result of resolving a manifest's libraries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariantReport {
    pub libraries: Vec<LibraryVariants>,
}

impl VariantReport {
    /// Total binaries across all libraries.
    pub fn binary_count(&self) -> usize {
        self.libraries.iter().map(|l| l.binaries.len()).sum()
    }
}

/// Resolve the variants of the requested libraries.
pub fn resolve_variants(manifest: &Manifest, opts: &VariantOptions) -> Result<VariantReport> {
    let components = if opts.libraries.is_empty() {
        manifest.libraries()
    } else {
        opts.libraries
            .iter()
            .map(|name| {
                manifest
                    .library(name)
                    .ok_or_else(|| LibraryNotFoundError::new(name, manifest.library_names()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let factory = PrebuiltBinaryFactory::with_default_instantiator(manifest.universes().clone());

    let mut report = VariantReport::default();
    for component in components {
        report.libraries.push(resolve_library(&factory, component)?);
    }

    tracing::info!(
        "Resolved {} binaries for {} libraries",
        report.binary_count(),
        report.libraries.len()
    );

    Ok(report)
}

fn resolve_library(
    factory: &PrebuiltBinaryFactory,
    mut component: PrebuiltLibrary,
) -> Result<LibraryVariants> {
    let selection = VariantSelection::select(&component, factory.universes());

    if selection.is_empty() {
        tracing::info!("`{}` selects no variants", component.name());
    }

    factory.create_selected_binaries(&mut component, &selection)?;

    let mut dimensions = Vec::new();
    if selection.uses_platform_dimension() {
        dimensions.push("platform".to_string());
    }
    if selection.uses_build_type_dimension() {
        dimensions.push("build_type".to_string());
    }
    if selection.uses_flavor_dimension() {
        dimensions.push("flavor".to_string());
    }

    Ok(LibraryVariants {
        name: component.name().to_string(),
        selection,
        dimensions,
        binaries: component.binaries().clone(),
    })
}

/// Format a report as a human-readable listing.
pub fn format_report(report: &VariantReport) -> String {
    let mut out = String::new();

    for library in &report.libraries {
        let _ = writeln!(
            out,
            "{} ({} variants, {} binaries)",
            library.name,
            library.selection.variant_count(),
            library.binaries.len()
        );

        if library.binaries.is_empty() {
            let _ = writeln!(out, "  (no variants selected)");
        }

        let width = library
            .binaries
            .iter()
            .map(|b| b.display_name().len())
            .max()
            .unwrap_or(0);

        for binary in &library.binaries {
            let _ = writeln!(
                out,
                "  {:<width$}  {:<6}  {}/{}/{}",
                binary.display_name(),
                binary.kind.to_string(),
                binary.platform.name(),
                binary.build_type.name(),
                binary.flavor.name(),
                width = width
            );
        }
    }

    if report.libraries.is_empty() {
        let _ = writeln!(out, "(no libraries declared)");
    }

    out
}

/// Format a single library's selection and naming for `binmatrix explain`.
pub fn format_explain(library: &LibraryVariants) -> String {
    let mut out = String::new();
    let selection = &library.selection;

    let _ = writeln!(out, "Library `{}`", library.name);
    let _ = writeln!(out);

    let axes = [
        ("platforms", selection.platforms.names(), selection.uses_platform_dimension()),
        ("build types", selection.build_types.names(), selection.uses_build_type_dimension()),
        ("flavors", selection.flavors.names(), selection.uses_flavor_dimension()),
    ];
    for (label, names, varies) in axes {
        let values = if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        };
        let note = if varies { "  [name dimension]" } else { "" };
        let _ = writeln!(out, "  {:<12} {}{}", format!("{}:", label), values, note);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} variants x 3 kinds = {} binaries",
        selection.variant_count(),
        library.binaries.len()
    );

    let names = library.variant_names();
    if !names.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Variant names:");
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }

    out
}

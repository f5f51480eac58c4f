//! High-level operations.
//!
//! This module contains the implementation of binmatrix commands.

pub mod variants;

pub use variants::{
    format_explain, format_report, resolve_variants, LibraryVariants, VariantOptions,
    VariantReport,
};

//! Command implementations

use std::path::PathBuf;

use anyhow::Result;

use binmatrix::util::diagnostic::suggestions;
use binmatrix::util::GlobalContext;

pub mod completions;
pub mod explain;
pub mod list;

/// Use the explicit manifest path, or search upward from the working directory.
fn manifest_path(ctx: &GlobalContext, explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => ctx
            .find_manifest()
            .map_err(|e| anyhow::anyhow!("{}\n{}", e, suggestions::NO_MANIFEST)),
    }
}

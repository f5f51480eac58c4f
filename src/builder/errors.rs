//! Binary creation error types and diagnostics.

use thiserror::Error;

use crate::builder::instantiator::InstantiationError;
use crate::util::diagnostic::Diagnostic;

/// Error while creating a component's binaries.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to create binaries for `{component}`")]
    Instantiation {
        component: String,
        /// Binaries already appended to the component before the failure
        created: usize,
        #[source]
        source: InstantiationError,
    },
}

impl BuildError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::Instantiation {
                component,
                created,
                source,
            } => {
                let mut diag =
                    Diagnostic::error(format!("failed to create binaries for `{}`", component))
                        .with_context(source.to_string());

                if *created > 0 {
                    diag = diag.with_context(format!(
                        "{} binaries were created before the failure and were kept",
                        created
                    ));
                }

                diag.with_suggestion(format!(
                    "Check the declaration of the {} variant `{}`",
                    source.kind, source.name
                ))
            }
        }
    }
}

//! User-friendly diagnostic messages.
//!
//! Every error shown to the user should say what went wrong, what led to
//! it, and what to do about it.

use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no manifest file is found.
    pub const NO_MANIFEST: &str =
        "help: Create a Variants.toml declaring your platforms, build types, flavors and libraries";

    /// Suggestion when a library is not found.
    pub const LIBRARY_NOT_FOUND: &str = "Run `binmatrix list` to see declared libraries";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(message)
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = match (self.severity, color) {
            (Severity::Error, true) => "\x1b[1;31merror\x1b[0m",
            (Severity::Warning, true) => "\x1b[1;33mwarning\x1b[0m",
            (Severity::Error, false) => "error",
            (Severity::Warning, false) => "warning",
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Variants.toml could not be parsed.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to parse `{path}`: {message}")]
#[diagnostic(
    code(binmatrix::manifest::parse),
    help("Axis values are tables with a `name`, libraries are `[libraries.<name>]` tables")
)]
pub struct ManifestParseError {
    pub path: String,
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

/// A library was requested that the manifest does not declare.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("library `{library}` is not declared")]
#[diagnostic(code(binmatrix::library::not_found))]
pub struct LibraryNotFoundError {
    pub library: String,
    #[help]
    pub suggestions: Option<String>,
}

impl LibraryNotFoundError {
    /// Build the error, suggesting declared libraries with a similar name.
    pub fn new<'a>(library: &str, declared: impl IntoIterator<Item = &'a str>) -> Self {
        let needle = library.to_lowercase();
        let similar: Vec<&str> = declared
            .into_iter()
            .filter(|name| {
                let name = name.to_lowercase();
                name.contains(&needle) || needle.contains(&name)
            })
            .collect();

        LibraryNotFoundError {
            library: library.to_string(),
            suggestions: if similar.is_empty() {
                Some(suggestions::LIBRARY_NOT_FOUND.to_string())
            } else {
                Some(format!("did you mean: {}?", similar.join(", ")))
            },
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());
        if let Some(ref help) = self.suggestions {
            diag = diag.with_suggestion(help.clone());
        }
        diag
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

//! Binary naming schemes.
//!
//! A naming scheme is a base name (the owning component's name) followed by
//! zero or more variant dimensions. Everything user-visible about a binary's
//! identity (its name, output directory, task names) is derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The naming identity of a binary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryNamingScheme {
    base_name: String,
    #[serde(default)]
    dimensions: Vec<String>,
}

impl BinaryNamingScheme {
    /// Create a scheme with no variant dimensions.
    pub fn new(base_name: impl Into<String>) -> Self {
        BinaryNamingScheme {
            base_name: base_name.into(),
            dimensions: Vec::new(),
        }
    }

    /// Return a copy of this scheme with one more variant dimension appended.
    pub fn with_variant_dimension(&self, dimension: impl Into<String>) -> Self {
        let mut dimensions = self.dimensions.clone();
        dimensions.push(dimension.into());
        BinaryNamingScheme {
            base_name: self.base_name.clone(),
            dimensions,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Variant dimensions in the order they were added.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// The binary name: the base name verbatim, followed by each dimension
    /// in upper camel case.
    ///
    /// `hello` with dimensions `x86`, `debug` gives `helloX86Debug`.
    pub fn name(&self) -> String {
        let mut name = self.base_name.clone();
        for dimension in &self.dimensions {
            push_capitalized(&mut name, dimension);
        }
        name
    }

    /// Relative output directory: `hello`, or `hello/x86Debug` when there are
    /// dimensions.
    pub fn output_directory_base(&self) -> String {
        if self.dimensions.is_empty() {
            self.base_name.clone()
        } else {
            format!(
                "{}/{}",
                self.base_name,
                make_name(self.dimensions.iter().map(String::as_str))
            )
        }
    }

    /// Name of a task operating on this binary, e.g. `linkHelloDebug` or
    /// `installHelloDebugSharedLibrary`.
    pub fn task_name(&self, verb: &str, object: Option<&str>) -> String {
        make_name(
            std::iter::once(verb)
                .chain(std::iter::once(self.base_name.as_str()))
                .chain(self.dimensions.iter().map(String::as_str))
                .chain(object),
        )
    }
}

impl fmt::Display for BinaryNamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Append `word` to `out` with its first character uppercased. The rest of
/// the word is kept as written, so `x86_64` and `x86-64` stay distinct.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Join words into a lower camel case identifier.
///
/// The first word gets a lowercased first letter, every following word an
/// uppercased one. Characters after the first are kept verbatim.
pub(crate) fn make_name<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words {
        push_capitalized(&mut out, word);
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use binmatrix::builder::MessageFormat;

/// binmatrix - Expand prebuilt native libraries into variant binaries
#[derive(Parser)]
#[command(name = "binmatrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the binaries created for each library
    List(ListArgs),

    /// Explain how a library's variants are selected and named
    Explain(ExplainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list this library (may be repeated)
    #[arg(short, long = "library", value_name = "NAME")]
    pub libraries: Vec<String>,

    /// Output format (human, json)
    #[arg(long, value_name = "FMT")]
    pub message_format: Option<MessageFormat>,

    /// Path to Variants.toml
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExplainArgs {
    /// Library to explain
    pub library: String,

    /// Path to Variants.toml
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

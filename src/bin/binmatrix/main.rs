//! binmatrix CLI - Prebuilt native library variant matrices

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use binmatrix::builder::BuildError;
use binmatrix::util::diagnostic::{emit, LibraryNotFoundError, ManifestParseError};
use binmatrix::GlobalContext;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("binmatrix=debug")
    } else {
        EnvFilter::new("binmatrix=info")
    };

    // stdout carries listings and JSON events, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = match GlobalContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            report(e, !cli.no_color);
            std::process::exit(1);
        }
    };
    ctx.set_verbose(cli.verbose);
    // --no-color wins over the config file
    ctx.set_color(!cli.no_color && ctx.load_config().color());

    if let Err(e) = run(cli.command, &ctx) {
        report(e, ctx.color());
        std::process::exit(1);
    }
}

fn run(command: Commands, ctx: &GlobalContext) -> Result<()> {
    match command {
        Commands::List(args) => commands::list::execute(args, ctx),
        Commands::Explain(args) => commands::explain::execute(args, ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn report(e: anyhow::Error, color: bool) {
    let e = match e.downcast::<ManifestParseError>() {
        Ok(parse) => {
            if !color {
                let _ = miette::set_hook(Box::new(|_| {
                    Box::new(miette::MietteHandlerOpts::new().color(false).build())
                }));
            }
            eprintln!("error: {}", parse);
            eprintln!("{:?}", miette::Report::new(parse));
            return;
        }
        Err(e) => e,
    };

    if let Some(not_found) = e.downcast_ref::<LibraryNotFoundError>() {
        emit(&not_found.to_diagnostic(), color);
        return;
    }

    if let Some(build) = e.downcast_ref::<BuildError>() {
        emit(&build.to_diagnostic(), color);
        return;
    }

    eprintln!("error: {:#}", e);
}

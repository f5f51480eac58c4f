//! `binmatrix list` command

use std::time::Instant;

use anyhow::Result;

use crate::cli::ListArgs;
use binmatrix::builder::{MessageFormat, VariantEvent};
use binmatrix::ops::variants::{format_report, resolve_variants, VariantOptions, VariantReport};
use binmatrix::util::GlobalContext;
use binmatrix::Manifest;

pub fn execute(args: ListArgs, ctx: &GlobalContext) -> Result<()> {
    let config = ctx.load_config();
    let format = args
        .message_format
        .unwrap_or_else(|| config.message_format());

    let manifest_path = super::manifest_path(ctx, args.manifest_path)?;
    tracing::debug!("Using manifest {}", manifest_path.display());
    let manifest = Manifest::load(&manifest_path)?;

    let start = Instant::now();
    let opts = VariantOptions {
        libraries: args.libraries,
    };
    let report = resolve_variants(&manifest, &opts)?;

    match format {
        MessageFormat::Human => print!("{}", format_report(&report)),
        MessageFormat::Json => print_events(&report, start.elapsed().as_millis() as u64),
    }

    Ok(())
}

fn print_events(report: &VariantReport, duration_ms: u64) {
    for library in &report.libraries {
        for binary in &library.binaries {
            println!("{}", VariantEvent::binary(binary).to_json());
        }
        let finished = VariantEvent::library_finished(
            &library.name,
            library.binaries.len() as u64,
            library.dimensions.clone(),
        );
        println!("{}", finished.to_json());
    }

    let finished = VariantEvent::finished(
        true,
        report.libraries.len() as u64,
        report.binary_count() as u64,
        duration_ms,
    );
    println!("{}", finished.to_json());
}

//! `binmatrix explain` command

use anyhow::Result;

use crate::cli::ExplainArgs;
use binmatrix::ops::variants::{format_explain, resolve_variants, VariantOptions};
use binmatrix::util::GlobalContext;
use binmatrix::Manifest;

pub fn execute(args: ExplainArgs, ctx: &GlobalContext) -> Result<()> {
    let manifest_path = super::manifest_path(ctx, args.manifest_path)?;
    let manifest = Manifest::load(&manifest_path)?;

    let opts = VariantOptions {
        libraries: vec![args.library],
    };
    let report = resolve_variants(&manifest, &opts)?;

    for library in &report.libraries {
        print!("{}", format_explain(library));

        if ctx.is_verbose() {
            println!();
            println!("Binaries:");
            for binary in &library.binaries {
                match binary.output_filename() {
                    Some(filename) => println!("  {} ({})", binary.display_name(), filename),
                    None => println!("  {}", binary.display_name()),
                }
            }
        }
    }

    Ok(())
}

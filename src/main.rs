mod args;
mod bundle;
mod context;
mod error;
mod packager;
mod result;
mod utils;

use args::Args;
use bundle::InclusionList;
use context::Context;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        output,
    } = Args::parse();

    let base_dir = utils::resolve_base_dir(path.as_deref())?;
    let ctx = Context::new(base_dir, verbose);

    let output = output.unwrap_or_else(|| PathBuf::from(bundle::DEFAULT_ARCHIVE));
    let list = InclusionList::default();

    cliclack::intro("extension-pack")?;

    let report = packager::pack(&ctx, &list, &output)?;

    if verbose {
        cliclack::log::info(format!(
            "{} of {} files archived, {} missing, {} duplicate",
            report.archived.len(),
            list.paths().len(),
            report.missing.len(),
            report.duplicates.len()
        ))?;
    }

    println!("{}", packager::packed_message(&report.output));
    cliclack::outro("Done")?;
    Ok(())
}

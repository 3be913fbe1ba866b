use crate::bundle::InclusionList;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::collections::HashSet;
use std::fs::{self, File, Metadata};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipWriter};

/// Outcome of a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// Archive that was written
    pub output: PathBuf,
    /// Entry names in the order they were added
    pub archived: Vec<String>,
    /// Inclusion paths that did not exist
    pub missing: Vec<String>,
    /// Inclusion paths skipped because an earlier path produced the same entry
    pub duplicates: Vec<String>,
}

/// Console line for an inclusion path that does not exist
pub fn missing_message(path: &str) -> String {
    format!("Warning: {} not found, skipping.", path)
}

/// Console line for an inclusion path that repeats an earlier entry
pub fn duplicate_message(path: &str) -> String {
    format!("Warning: {} is listed more than once, skipping.", path)
}

/// Console line printed once the archive is finalized
pub fn packed_message(output: &Path) -> String {
    format!("Extension packed into {}", output.display())
}

/// Write every existing path of `list` into a new zip archive at `output`.
///
/// Paths are resolved against `ctx.base_dir`, as is `output` when relative.
/// Missing paths are reported and skipped. Any other failure aborts the run
/// and removes the partially written archive.
pub fn pack(ctx: &Context, list: &InclusionList, output: &Path) -> Result<PackReport> {
    let entry_names = list.entry_names()?;
    let output_path = utils::resolve_in(&ctx.base_dir, output);

    if entry_names
        .iter()
        .any(|name| ctx.base_dir.join(name) == output_path)
    {
        return Err(Error::Custom(format!(
            "Archive {} is also listed as an input",
            output_path.display()
        )));
    }

    let file = File::create(&output_path)?;

    let mut report = PackReport {
        output: output_path,
        archived: Vec::new(),
        missing: Vec::new(),
        duplicates: Vec::new(),
    };

    match write_archive(ctx, file, list.paths(), &entry_names, &mut report) {
        Ok(()) => Ok(report),
        Err(err) => {
            let _ = fs::remove_file(&report.output);
            Err(err)
        }
    }
}

fn write_archive(
    ctx: &Context,
    file: File,
    paths: &[String],
    entry_names: &[String],
    report: &mut PackReport,
) -> Result<()> {
    let mut zip = ZipWriter::new(file);

    let file_options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);
    let dir_options = file_options.unix_permissions(0o755);

    let mut seen = HashSet::new();

    for (path, name) in paths.iter().zip(entry_names) {
        let source = ctx.base_dir.join(name);

        let metadata = match fs::metadata(&source) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                println!("{}", missing_message(path));
                report.missing.push(path.clone());
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if !seen.insert(name.clone()) {
            println!("{}", duplicate_message(path));
            report.duplicates.push(path.clone());
            continue;
        }

        let modified = modified_time(&metadata);

        if metadata.is_dir() {
            zip.add_directory(name.clone(), dir_options.last_modified_time(modified))?;
        } else {
            zip.start_file(name.clone(), file_options.last_modified_time(modified))?;
            let mut f = File::open(&source)?;
            io::copy(&mut f, &mut zip)?;
        }

        if ctx.verbose {
            println!("Added {}", name);
        }

        report.archived.push(name.clone());
    }

    zip.finish()?;
    Ok(())
}

/// Source mtime as a zip timestamp, falling back to the zip epoch when it is
/// unavailable or outside the 1980-2107 range the format can store
fn modified_time(metadata: &Metadata) -> DateTime {
    metadata
        .modified()
        .ok()
        .and_then(|mtime| DateTime::try_from(OffsetDateTime::from(mtime)).ok())
        .unwrap_or_default()
}

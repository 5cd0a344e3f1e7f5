//! Tool subcommand for computing the constant terms of root documents.
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};

use constant_term::{common::logger::get_logger, Batch, Config, Document};

/// Load a root document from the given file.
fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let document = Document::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(document)
}

/// Write the roots selected for the constant term of the given document.
fn write_roots<W: Write>(out: &mut W, document: &Document) -> Result<()> {
    for root in document.select_roots()? {
        writeln!(out, "  root {}: {}", root.index, root.value)?;
    }

    Ok(())
}

/// Compute and print the constant terms of the given root documents.
///
/// Every document is reported on, an error is returned afterwards if any of
/// them could not be loaded or evaluated.
pub fn compute<W: Write>(
    paths: &[PathBuf],
    config: &Config,
    verbose: bool,
    out: &mut W,
) -> Result<()> {
    let logger = get_logger("tools/compute");
    let mut failures = 0;

    let mut loaded = Vec::with_capacity(paths.len());
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match load_document(path) {
            Ok(document) => {
                loaded.push(path);
                documents.push(document);
            }
            Err(err) => {
                error!(logger, "failed to load document"; "path" => %path.display(), "err" => %err);
                writeln!(out, "Failed to load {}: {:#}", path.display(), err)?;
                failures += 1;
            }
        }
    }

    let results = Batch::new(config).constant_terms(&documents);
    for ((path, document), result) in loaded.iter().zip(&documents).zip(results) {
        match result {
            Ok(constant_term) => {
                if verbose {
                    write_roots(out, document)?;
                }
                writeln!(
                    out,
                    "Constant term for {}: {}",
                    path.display(),
                    constant_term
                )?;
            }
            Err(err) => {
                error!(logger, "failed to compute constant term"; "path" => %path.display(), "err" => %err);
                writeln!(
                    out,
                    "Failed to compute constant term for {}: {}",
                    path.display(),
                    err
                )?;
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} documents failed", failures, paths.len());
    }

    Ok(())
}

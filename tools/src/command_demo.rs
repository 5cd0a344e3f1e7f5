//! Tool subcommand for evaluating the bundled sample documents.
use std::io::Write;

use anyhow::{Context, Result};

use constant_term::Document;

/// Bundled sample documents.
const SAMPLES: &[(&str, &str)] = &[
    ("test case 1", include_str!("../samples/case1.json")),
    ("test case 2", include_str!("../samples/case2.json")),
];

/// Compute and print the constant terms of the bundled sample documents.
pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    for (name, data) in SAMPLES {
        let document =
            Document::from_json(data).with_context(|| format!("failed to parse {}", name))?;
        let constant_term = document
            .constant_term()
            .with_context(|| format!("failed to compute constant term for {}", name))?;
        writeln!(out, "Constant term for {}: {}", name, constant_term)?;
    }

    Ok(())
}

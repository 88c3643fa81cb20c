//! Per-invocation orchestration: parse, merge, render, persist.

use std::path::Path;

use anyhow::Result;
use tracing::instrument;

use crate::cli::AppContext;
use crate::core::format;
use crate::core::manifest::{Manifest, ManifestError, parse_manifest};
use crate::core::merge::{MergeState, merge};
use crate::infra::console::Console;

/// Run one bundling pass for the manifest at `manifest_path`.
///
/// A missing manifest is reported but not fatal: the run continues with an
/// empty manifest and a degenerate output, preserving the tool's original
/// contract. Only output I/O failures abort with a non-zero exit.
#[instrument(skip(ctx), fields(manifest = %manifest_path.display()))]
pub fn run(manifest_path: &Path, ctx: &AppContext) -> Result<()> {
    let console = Console::new(ctx);

    let manifest = match parse_manifest(manifest_path) {
        Ok(manifest) => manifest,
        Err(err @ ManifestError::Missing(_)) => {
            console.error(&err.to_string());
            Manifest::default()
        }
        Err(ManifestError::Io(err)) => return Err(err),
    };

    let mut state = MergeState::new(&manifest.namespace);
    merge(&manifest, &mut state, &console)?;
    let bundle = format::render(&manifest, state);

    if ctx.dry_run {
        console.info(&format!(
            "DRY RUN: would write {} bytes to {} ({} unresolved fragment(s))",
            bundle.text.len(),
            manifest.output_header,
            bundle.unresolved.len()
        ));
        return Ok(());
    }

    if manifest.output_header.is_empty() {
        console.error("No output header configured; nothing written");
        return Ok(());
    }

    format::persist(&bundle, &manifest.output_header)?;

    console.info(&format!(
        "Baked {} inclusion(s) into {}",
        manifest.inclusions.len(),
        manifest.output_header
    ));

    if !bundle.unresolved.is_empty() {
        console.error(&format!(
            "{} fragment(s) could not be resolved, see {}",
            bundle.unresolved.len(),
            format::ERROR_FILE
        ));
    }

    Ok(())
}

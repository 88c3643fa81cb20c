//! Directive-file parsing into an immutable [`Manifest`].

use std::path::Path;

use tracing::debug;

use crate::core::classify::{DirectiveLine, Section, classify_directive};
use crate::infra::io::read_file_smart;

/// Parsed directive file. Immutable once built; `inclusions` order is the
/// authoritative merge order, with no reordering or deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Directory prefix prepended to every fragment path.
    pub source_root: String,
    /// Output file name; also drives the include-guard macro.
    pub output_header: String,
    /// Target namespace; empty means no namespace wrapping.
    pub namespace: String,
    /// Lines emitted verbatim before the guard.
    pub header_lines: Vec<String>,
    /// Lines emitted after the guard, before the fragments.
    pub system_library_lines: Vec<String>,
    /// Ordered fragment inclusion list.
    pub inclusions: Vec<InclusionEntry>,
}

/// One `[INCLUSIONS]` entry: a fragment path relative to the source root,
/// optionally paired with a conditional-compilation macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionEntry {
    pub fragment_path: String,
    pub condition: Option<String>,
}

impl InclusionEntry {
    /// Split `path` or `path,MACRO`. Only one macro per entry is supported;
    /// anything past a second comma is ignored.
    fn parse(line: &str) -> Self {
        let mut tokens = line.split(',');
        let fragment_path = tokens.next().unwrap_or_default().to_string();
        let condition = tokens
            .next()
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Self { fragment_path, condition }
    }
}

/// Errors surfaced by the manifest parser.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest path does not point at a file. Callers recover from
    /// this by bundling an empty manifest.
    #[error("Invalid input file: {0}")]
    Missing(String),
    /// The manifest exists but could not be read.
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Parse the directive file at `path` in a single pass.
///
/// Permissive by design: unrecognized lines are ignored, never rejected.
/// The only hard failure is an absent or unreadable file.
pub fn parse_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::Missing(path.display().to_string()));
    }

    let content = read_file_smart(path)?;
    let manifest = parse_lines(content.as_ref());

    debug!(
        manifest = %path.display(),
        inclusions = manifest.inclusions.len(),
        "parsed manifest"
    );

    Ok(manifest)
}

/// Single pass over the manifest text. Section switches are monotonic:
/// re-encountering an earlier marker never resumes a finished section.
fn parse_lines(content: &str) -> Manifest {
    let mut manifest = Manifest::default();
    let mut section: Option<Section> = None;

    for raw in content.lines() {
        match classify_directive(raw) {
            DirectiveLine::StructuralComment => {}
            DirectiveLine::KeyAssignment { key, value } => match key {
                "source_path" => manifest.source_root = value.to_string(),
                "output_header" => manifest.output_header = value.to_string(),
                "namespace" => manifest.namespace = value.to_string(),
                _ => {}
            },
            DirectiveLine::SectionMarker(next) => {
                if Some(next) > section {
                    section = Some(next);
                }
            }
            DirectiveLine::PreprocessorPreserve(line) | DirectiveLine::SectionContent(line) => {
                match section {
                    Some(Section::Header) => manifest.header_lines.push(line.to_string()),
                    Some(Section::SystemLibraries) => {
                        manifest.system_library_lines.push(line.to_string());
                    }
                    Some(Section::Inclusions) => {
                        // A blank line is not a fragment path
                        if !line.is_empty() {
                            manifest.inclusions.push(InclusionEntry::parse(line));
                        }
                    }
                    // Content before any section marker is dropped
                    None => {}
                }
            }
        }
    }

    manifest
}

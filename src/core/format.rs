//! Guard derivation, final assembly, and normalization.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::core::manifest::Manifest;
use crate::core::merge::MergeState;
use crate::infra::io::write_file;

/// Spaces substituted for each tab character.
const TAB_SIZE: usize = 4;

/// Fixed side-channel report for unresolved fragments.
pub const ERROR_FILE: &str = "errors.txt";

/// Final text plus the unresolved-fragment report, ready to persist.
#[derive(Debug)]
pub struct RenderedBundle {
    pub text: String,
    pub unresolved: Vec<String>,
}

/// Derive the include-guard macro from the output file name:
/// `bundle.h` becomes `_BUNDLE_H_`.
pub fn guard_macro(output_header: &str) -> String {
    let stem = Path::new(output_header)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("_{stem}_H_").to_uppercase()
}

/// Assemble the final header text and consume the merge state.
///
/// Layout: header preamble, guard pair, system libraries, namespace open,
/// merged body, namespace close, terminal `#endif` - then normalized.
pub fn render(manifest: &Manifest, state: MergeState) -> RenderedBundle {
    state.namespace.finish();

    let guard = guard_macro(&manifest.output_header);
    let mut out = String::new();

    for line in &manifest.header_lines {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str("#ifndef ");
    out.push_str(&guard);
    out.push('\n');
    out.push_str("#define ");
    out.push_str(&guard);
    out.push_str("\n\n");

    for line in &manifest.system_library_lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&state.namespace.opening());
    out.push_str(&state.body);
    out.push('\n');
    if state.namespace.is_configured() {
        out.push_str("}\n");
    }
    out.push_str("#endif");

    RenderedBundle {
        text: normalize(&out),
        unresolved: state.unresolved,
    }
}

/// Collapse runs of three or more newlines to exactly two and expand tabs
/// to spaces.
pub fn normalize(text: &str) -> String {
    static NEWLINE_RUNS: OnceLock<Regex> = OnceLock::new();
    let re = NEWLINE_RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("valid literal pattern"));

    re.replace_all(text, "\n\n")
        .replace('\t', &" ".repeat(TAB_SIZE))
}

/// Write the bundled header, plus the error side file when any fragment
/// was unresolved. Plain overwrite, not atomic.
pub fn persist(bundle: &RenderedBundle, output_header: &str) -> Result<()> {
    write_file(output_header, &bundle.text)?;

    if !bundle.unresolved.is_empty() {
        let mut report = String::new();
        for message in &bundle.unresolved {
            report.push_str(message);
            report.push('\n');
        }
        write_file(ERROR_FILE, &report)?;
    }

    Ok(())
}

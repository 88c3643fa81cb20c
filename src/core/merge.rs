//! Marker-driven fragment filtering and accumulation.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::classify::{FragmentLine, classify_fragment};
use crate::core::manifest::Manifest;
use crate::core::namespace::NamespaceState;
use crate::infra::console::Console;
use crate::infra::io::read_file_smart;

/// Running state threaded through one merge pass. Created empty, mutated
/// fragment by fragment, consumed exactly once by the output formatter.
#[derive(Debug)]
pub struct MergeState {
    /// Accumulated fragment body.
    pub body: String,
    /// Namespace bookkeeping.
    pub namespace: NamespaceState,
    /// One human-readable message per unresolved fragment.
    pub unresolved: Vec<String>,
}

impl MergeState {
    pub fn new(namespace: &str) -> Self {
        Self {
            body: String::new(),
            namespace: NamespaceState::new(namespace),
            unresolved: Vec::new(),
        }
    }
}

/// Merge every inclusion in manifest order.
///
/// Best-effort: an unresolved fragment is recorded and skipped, never
/// aborting the pass. A conditional entry is wrapped in a balanced
/// `#ifdef`/`#endif` pair whether or not its fragment resolves, so a
/// missing fragment leaves an empty conditional block behind.
pub fn merge(manifest: &Manifest, state: &mut MergeState, console: &Console) -> Result<()> {
    for entry in &manifest.inclusions {
        let target = format!("{}{}", manifest.source_root, entry.fragment_path);

        if let Some(macro_name) = &entry.condition {
            state.body.push_str("#ifdef ");
            state.body.push_str(macro_name);
            state.body.push('\n');
        }

        if Path::new(&target).is_file() {
            console.trace(&format!("Merging {target}"));
            let content = read_file_smart(&target)?;
            append_fragment(content.as_ref(), state);
        } else {
            debug!(fragment = %target, "unresolved fragment");
            state.unresolved.push(format!("Could not write {target}"));
        }

        if entry.condition.is_some() {
            state.body.push_str("#endif\n");
        }
    }

    Ok(())
}

/// Append one fragment to the merge buffer, omitting its final line (the
/// fragment's own closing guard `#endif`) and filtering the rest.
fn append_fragment(content: &str, state: &mut MergeState) {
    let lines: Vec<&str> = content.lines().collect();
    let Some((_, kept)) = lines.split_last() else {
        return;
    };

    let namespaced = state.namespace.is_configured();

    for &line in kept {
        match classify_fragment(line, namespaced) {
            FragmentLine::Excluded
            | FragmentLine::Include
            | FragmentLine::UsingNamespace
            | FragmentLine::GuardOpen
            | FragmentLine::GuardDefine => {}
            FragmentLine::NamespaceExclusionStart => {
                let emission = state.namespace.suspend();
                state.body.push_str(emission);
            }
            FragmentLine::NamespaceExclusionEnd => {
                let emission = state.namespace.resume();
                state.body.push_str(&emission);
            }
            FragmentLine::ExemptInclude | FragmentLine::Content => {
                state.body.push_str(line);
                state.body.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "\
#ifndef _WIDGET_H_
#define _WIDGET_H_

#include \"detail.h\"
#include <immintrin.h> // VOLTRON_INCLUDE
using namespace std;
#ifdef UNIT_TEST // VOLTRON_EXCLUDE
#include <gtest/gtest.h> // VOLTRON_EXCLUDE
#endif // VOLTRON_EXCLUDE

struct Widget
{
    int id = 0;
};
#endif
";

    #[test]
    fn fragment_filtering_keeps_only_real_content() {
        let mut state = MergeState::new("demo");
        append_fragment(FRAGMENT, &mut state);

        assert_eq!(
            state.body,
            "\n#include <immintrin.h> // VOLTRON_INCLUDE\n\nstruct Widget\n{\n    int id = 0;\n};\n"
        );
    }

    #[test]
    fn trailing_guard_line_is_dropped_even_when_unfiltered() {
        let mut state = MergeState::new("");
        append_fragment("int x;\n#endif\n", &mut state);
        assert_eq!(state.body, "int x;\n");
    }

    #[test]
    fn empty_fragment_appends_nothing() {
        let mut state = MergeState::new("");
        append_fragment("", &mut state);
        assert_eq!(state.body, "");
    }

    #[test]
    fn exclusion_markers_rewrite_namespace_boundaries() {
        let fragment = "\
#ifndef _GLOBALS_H_
#define _GLOBALS_H_
// VOLTRON_NAMESPACE_EXCLUSION_START
void* global_hook = nullptr;
// VOLTRON_NAMESPACE_EXCLUSION_END
struct Inside {};
#endif
";
        let mut state = MergeState::new("demo");
        append_fragment(fragment, &mut state);

        assert_eq!(
            state.body,
            "\n} // NAMESPACE END \nvoid* global_hook = nullptr;\nnamespace demo\n{\nstruct Inside {};\n"
        );
    }

    #[test]
    fn markers_pass_through_without_a_namespace() {
        let fragment = "// VOLTRON_NAMESPACE_EXCLUSION_START\nint x;\n#endif\n";
        let mut state = MergeState::new("");
        append_fragment(fragment, &mut state);
        assert_eq!(state.body, "// VOLTRON_NAMESPACE_EXCLUSION_START\nint x;\n");
    }

    #[test]
    fn crlf_fragments_are_normalized() {
        let mut state = MergeState::new("");
        append_fragment("int x;\r\nint y;\r\n#endif\r\n", &mut state);
        assert_eq!(state.body, "int x;\nint y;\n");
    }
}

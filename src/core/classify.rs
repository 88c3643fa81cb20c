//! Line classification for manifest and fragment text.
//!
//! Both the manifest parser and the fragment merger dispatch exhaustively on
//! closed tag sets instead of re-probing string prefixes at every use site.

/// Marker dropping a fragment line from the bundle.
pub const EXCLUDE_MARKER: &str = "VOLTRON_EXCLUDE";

/// Marker exempting a fragment line from the `#include` filter.
pub const INCLUDE_MARKER: &str = "VOLTRON_INCLUDE";

/// Marker closing the configured namespace around global-scope content.
pub const NAMESPACE_EXCLUSION_START: &str = "VOLTRON_NAMESPACE_EXCLUSION_START";

/// Marker reopening the configured namespace.
pub const NAMESPACE_EXCLUSION_END: &str = "VOLTRON_NAMESPACE_EXCLUSION_END";

/// Preprocessor prefixes a manifest may embed as literal section content.
const PRESERVED_PREFIXES: [&str; 5] = ["#include", "#ifdef", "#endif", "#if", "#elif"];

/// Sections of the manifest file, in the order they may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Header,
    SystemLibraries,
    Inclusions,
}

/// One raw manifest line, tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveLine<'a> {
    /// `# ...` with no preprocessor meaning; skipped.
    StructuralComment,
    /// `#include`/`#ifdef`/`#endif`/`#if`/`#elif`; kept as section content.
    PreprocessorPreserve(&'a str),
    /// `key=value` global setting for one of the recognized keys.
    KeyAssignment { key: &'a str, value: &'a str },
    /// `[HEADER]`, `[SYSTEM_LIBRARIES]`, or `[INCLUSIONS]`.
    SectionMarker(Section),
    /// Anything else, trimmed; lands in the active section.
    SectionContent(&'a str),
}

/// Recognized `key=value` keys, in the manifest's conventional order.
const SETTING_KEYS: [&str; 3] = ["source_path", "output_header", "namespace"];

/// Tag one raw manifest line.
///
/// The comment check runs on the untrimmed line: an indented `#` is ordinary
/// section content, matching the directive-file convention.
pub fn classify_directive(raw: &str) -> DirectiveLine<'_> {
    if raw.starts_with('#') {
        if PRESERVED_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            return DirectiveLine::PreprocessorPreserve(raw.trim());
        }
        return DirectiveLine::StructuralComment;
    }

    let line = raw.trim();

    for key in SETTING_KEYS {
        if line.strip_prefix(key).is_some_and(|rest| rest.starts_with('=')) {
            // Second `=`-separated token; `a=b=c` assigns `b`
            let value = line.split('=').nth(1).unwrap_or("");
            return DirectiveLine::KeyAssignment { key, value };
        }
    }

    match line {
        "[HEADER]" => DirectiveLine::SectionMarker(Section::Header),
        "[SYSTEM_LIBRARIES]" => DirectiveLine::SectionMarker(Section::SystemLibraries),
        "[INCLUSIONS]" => DirectiveLine::SectionMarker(Section::Inclusions),
        _ => DirectiveLine::SectionContent(line),
    }
}

/// One fragment line, tagged in filter precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLine {
    /// Carries the exclusion marker; never emitted.
    Excluded,
    /// Exempted `#include`; emitted unchanged.
    ExemptInclude,
    /// Unmarked `#include`; dropped.
    Include,
    /// `using namespace` directive; dropped.
    UsingNamespace,
    /// The fragment's own `#ifndef ..._H_` guard opener; dropped.
    GuardOpen,
    /// The fragment's own `#define ..._H_` guard define; dropped.
    GuardDefine,
    /// Replaced by the namespace-closing emission.
    NamespaceExclusionStart,
    /// Replaced by the namespace-reopening emission.
    NamespaceExclusionEnd,
    /// Ordinary content; emitted unchanged.
    Content,
}

/// Tag one fragment line.
///
/// `namespaced` is whether a target namespace is configured; without one the
/// exclusion markers have no meaning and pass through as ordinary content.
pub fn classify_fragment(line: &str, namespaced: bool) -> FragmentLine {
    if line.contains(EXCLUDE_MARKER) {
        return FragmentLine::Excluded;
    }

    if line.contains("#include") {
        return if line.contains(INCLUDE_MARKER) {
            FragmentLine::ExemptInclude
        } else {
            FragmentLine::Include
        };
    }

    if line.contains("using namespace") {
        return FragmentLine::UsingNamespace;
    }

    if line.contains("_H_") && line.contains("#ifndef") {
        return FragmentLine::GuardOpen;
    }

    if line.contains("_H_") && line.contains("#define") {
        return FragmentLine::GuardDefine;
    }

    if namespaced && line.contains(NAMESPACE_EXCLUSION_START) {
        return FragmentLine::NamespaceExclusionStart;
    }

    if namespaced && line.contains(NAMESPACE_EXCLUSION_END) {
        return FragmentLine::NamespaceExclusionEnd;
    }

    FragmentLine::Content
}

//! Namespace open/close bookkeeping across a merge.

use tracing::warn;

/// Tracks whether the configured namespace block is currently open while
/// fragments stream through the merger.
///
/// Exclusion markers inside fragments suspend and resume the block around
/// content that must live at global scope. Marker pairing is trusted, not
/// validated: every `START` is assumed to be matched by an `END` in the same
/// or a later fragment.
#[derive(Debug)]
pub struct NamespaceState {
    name: String,
    is_open: bool,
}

impl NamespaceState {
    /// A configured namespace is considered open from the start of the
    /// merge; the opening text itself is emitted by the output formatter.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_open: !name.is_empty(),
        }
    }

    /// Whether a target namespace is configured at all.
    pub fn is_configured(&self) -> bool {
        !self.name.is_empty()
    }

    /// Opening emission placed after the system-library block, and again
    /// whenever an exclusion region ends. Empty when unconfigured.
    pub fn opening(&self) -> String {
        if self.is_configured() {
            format!("namespace {}\n{{\n", self.name)
        } else {
            String::new()
        }
    }

    /// Leave the namespace for an exclusion region.
    pub fn suspend(&mut self) -> &'static str {
        self.is_open = false;
        "\n} // NAMESPACE END \n"
    }

    /// Re-enter the namespace after an exclusion region.
    pub fn resume(&mut self) -> String {
        self.is_open = true;
        self.opening()
    }

    /// End-of-merge balance check. The formatter emits its closing brace
    /// unconditionally, so an unpaired `START` is only surfaced as a log.
    pub fn finish(&self) {
        if self.is_configured() && !self.is_open {
            warn!(
                namespace = %self.name,
                "exclusion markers left the namespace closed at end of merge"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_namespace_emits_nothing() {
        let state = NamespaceState::new("");
        assert!(!state.is_configured());
        assert_eq!(state.opening(), "");
    }

    #[test]
    fn suspend_and_resume_toggle_state() {
        let mut state = NamespaceState::new("demo");
        assert_eq!(state.opening(), "namespace demo\n{\n");

        assert_eq!(state.suspend(), "\n} // NAMESPACE END \n");
        assert!(!state.is_open);

        assert_eq!(state.resume(), "namespace demo\n{\n");
        assert!(state.is_open);
    }
}

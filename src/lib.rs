//! **voltron** - Manifest-driven amalgamation of header fragments into a single distributable header
//!
//! Merges independently maintained header fragments in manifest order, stripping
//! per-fragment include guards, wrapping entries in conditional-compilation blocks,
//! and managing namespace boundaries. Single pass, line-oriented, byte-deterministic.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Amalgamation engine - manifest parsing, merging, and output assembly
pub mod core {
    /// Closed tag sets for manifest lines and fragment lines
    pub mod classify;

    /// Directive-file parsing into an immutable Manifest
    pub mod manifest;
    pub use manifest::{InclusionEntry, Manifest, ManifestError};

    /// Marker-driven fragment filtering and accumulation
    pub mod merge;
    pub use merge::MergeState;

    /// Namespace open/close bookkeeping across a merge
    pub mod namespace;

    /// Guard derivation, final assembly, and normalization
    pub mod format;

    /// Per-invocation orchestration: parse, merge, render, persist
    pub mod bundle;
    pub use bundle::run as bundle_run;
}

/// Infrastructure - I/O and console reporting
pub mod infra {
    /// Severity-colored console messages
    pub mod console;
    pub use console::Console;

    /// Smart file reading and output writing
    pub mod io;
    pub use io::{FileContent, read_file_smart};
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli};
pub use core::bundle_run;
pub use core::manifest::{InclusionEntry, Manifest};

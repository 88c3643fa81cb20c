use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "voltron")]
#[command(
    about = "Bakes header fragments listed in a manifest into a single distributable header"
)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Manifest file describing the bundle
    #[arg(default_value = "voltron.txt")]
    pub manifest: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress per-fragment trace output and the run summary
    #[arg(long)]
    pub quiet: bool,

    /// Report what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Print shell completions to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Manifest path with `~` expansion applied.
    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.manifest).into_owned())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

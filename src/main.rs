use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voltron::cli::{AppContext, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return voltron::completion::print(shell);
    }

    // Keep stdout for bundle output messages; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    voltron::core::bundle_run(&cli.manifest_path(), &ctx)
}

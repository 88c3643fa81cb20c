//! Severity-colored console reporting.
//!
//! Blue trace lines for per-fragment progress, yellow for run summaries,
//! red for errors. `--no-color` and the `NO_COLOR` convention disable
//! styling; `--quiet` drops trace and summary output entirely.

use owo_colors::OwoColorize;

use crate::cli::AppContext;

#[derive(Debug)]
pub struct Console {
    quiet: bool,
    color: bool,
}

impl Console {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            quiet: ctx.quiet,
            color: !ctx.no_color && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Per-step progress line; suppressed by `--quiet`.
    pub fn trace(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{}", message.blue());
        } else {
            println!("{message}");
        }
    }

    /// Run summary; suppressed by `--quiet`.
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{message}");
        }
    }

    /// Always printed, to stderr.
    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{message}");
        }
    }
}

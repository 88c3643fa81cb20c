//! Shell completion generation using clap_complete.

use anyhow::Result;
use clap::{Command, CommandFactory};
use clap_complete::{Shell as CompletionShell, generate};
use std::io;

use crate::cli::{Cli, Shell};

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
            Shell::Elvish => CompletionShell::Elvish,
        }
    }
}

pub fn print(shell: Shell) -> Result<()> {
    let mut cmd: Command = Cli::command();
    generate(
        CompletionShell::from(shell),
        &mut cmd,
        "voltron",
        &mut io::stdout(),
    );
    Ok(())
}

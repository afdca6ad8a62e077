use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, Shell};

pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = "folio";
    let mut stdout = std::io::stdout();
    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut stdout),
        Shell::Powershell => generate(shells::PowerShell, &mut cmd, bin_name, &mut stdout),
    }
}

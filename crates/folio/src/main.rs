mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod content;
mod embed;
mod render;
mod state;
mod storage;
mod theme;
mod watcher;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    cli.run()
}

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about)]
#[command(long_about = "A desktop portfolio viewer.\n\n\
    Describe yourself and your projects in a small YAML manifest and\n\
    present them as a scrolling page with live demo previews.\n\n\
    Examples:\n  \
    folio                        Present the built-in sample portfolio\n  \
    folio me.yaml                Present your own manifest (fullscreen)\n  \
    folio me.yaml --windowed     Present in a window\n  \
    folio init                   Scaffold a manifest interactively\n  \
    folio check me.yaml          Probe every project demo URL")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Portfolio manifest to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific section (home, about, projects, skills, contact)
    #[arg(long, global = false)]
    pub section: Option<String>,

    /// Override the saved theme for this session
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a portfolio manifest interactively
    Init {
        /// Where to write the manifest
        path: Option<PathBuf>,
    },

    /// Probe every project demo URL in a manifest
    Check {
        /// Manifest to check (the built-in sample when omitted)
        file: Option<PathBuf>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Export each section as a PNG image
    Export {
        /// Manifest to export (the built-in sample when omitted)
        file: Option<PathBuf>,

        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Palette to export with
        #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
        theme: String,
    },

    /// Print the manifest format reference
    Schema {
        /// Print a concise quick-reference card instead of the full reference
        #[arg(long)]
        short: bool,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.section, defaults.windowed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Init { path }) => crate::commands::init::run(path),
            Some(Commands::Check { file }) => crate::commands::check::run(file, self.quiet),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Export {
                file,
                output_dir,
                width,
                height,
                theme,
            }) => crate::commands::export::run(file, output_dir, width, height, &theme),
            Some(Commands::Schema { short }) => {
                crate::commands::schema::run(short);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                if self.verbose > 0 {
                    if let Ok(path) = crate::config::Config::path() {
                        eprintln!("folio: config at {}", path.display());
                    }
                }
                crate::app::run(self.file, self.windowed, self.section, self.theme)
            }
        }
    }
}

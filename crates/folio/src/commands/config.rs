use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let path = Config::path()?;
            let config = Config::load_or_default();
            println!("{} {}", "Config file:".bold(), path.display());
            println!();
            let yaml = serde_yaml::to_string(&config)?;
            if yaml.trim() == "{}" {
                println!("{}", "No values set. Defaults apply.".yellow());
                println!("Valid keys: defaults.section, defaults.windowed");
            } else {
                println!("{yaml}");
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!(
                "{} {key} = {value} ({})",
                "Saved:".green().bold(),
                path.display()
            );
            Ok(())
        }
    }
}

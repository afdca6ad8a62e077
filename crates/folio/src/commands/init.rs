use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use inquire::{Confirm, Text};

use crate::content::{Link, Portfolio, Project};

/// Walk the user through a starter manifest.
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("portfolio.yaml"));

    if path.exists() {
        let overwrite = Confirm::new(&format!("{} already exists. Overwrite?", path.display()))
            .with_default(false)
            .prompt()?;
        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let name = Text::new("Your name:").prompt()?;
    let tagline = Text::new("Tagline:")
        .with_placeholder("Web Developer & Digital Innovator")
        .prompt()?;
    let about = Text::new("A few sentences about you:").prompt()?;
    let github = Text::new("GitHub profile URL (leave empty to skip):").prompt()?;
    let email = Text::new("Contact email (leave empty to skip):").prompt()?;

    let mut contact = Vec::new();
    if !github.trim().is_empty() {
        contact.push(Link {
            label: "GitHub".to_string(),
            url: github.trim().to_string(),
        });
    }
    if !email.trim().is_empty() {
        contact.push(Link {
            label: "Email".to_string(),
            url: format!("mailto:{}", email.trim()),
        });
    }

    let mut projects = Vec::new();
    if Confirm::new("Add a placeholder project entry to edit later?")
        .with_default(true)
        .prompt()?
    {
        projects.push(Project {
            title: "My First Project".to_string(),
            description: "One or two sentences about what it does.".to_string(),
            demo_url: "https://example.com/".to_string(),
        });
    }

    let portfolio = Portfolio {
        name,
        tagline,
        about,
        avatar: None,
        footer: None,
        projects,
        skills: vec!["JavaScript".to_string(), "Rust".to_string()],
        contact,
    };
    portfolio.validate()?;

    let yaml = serde_yaml::to_string(&portfolio)?;
    std::fs::write(&path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Created".green().bold(), path.display());
    println!("Present it with: folio {}", path.display());
    Ok(())
}

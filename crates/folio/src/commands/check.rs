use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::content::Portfolio;

/// Probe every demo URL in the catalog and report what answered.
pub fn run(file: Option<PathBuf>, quiet: bool) -> Result<()> {
    let portfolio = match &file {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::builtin(),
    };

    if portfolio.projects.is_empty() {
        println!("{}", "The manifest has no projects to check.".yellow());
        return Ok(());
    }

    let mut reachable = 0;
    let mut failed = 0;

    for project in &portfolio.projects {
        if !quiet {
            print!("  Checking {} ... ", project.title.bold());
            std::io::stdout().flush().ok();
        }
        match probe(&project.demo_url) {
            Ok(status) => {
                if !quiet {
                    println!("{}", format!("ok ({status})").green());
                }
                reachable += 1;
            }
            Err(e) => {
                if !quiet {
                    println!("{}", format!("failed: {e}").red());
                }
                failed += 1;
            }
        }
    }

    if !quiet {
        println!();
    }
    let summary = format!(
        "{reachable} reachable, {failed} failed of {} demo URL(s)",
        portfolio.projects.len()
    );
    if failed == 0 {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red());
    }
    Ok(())
}

fn probe(url: &str) -> Result<u16, String> {
    ureq::get(url)
        .call()
        .map(|response| response.status().as_u16())
        .map_err(|e| e.to_string())
}

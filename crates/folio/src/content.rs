use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid url pattern"));

/// A portfolio manifest: everything the page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub about: String,

    /// Path to an avatar image, relative to the manifest file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub contact: Vec<Link>,
}

/// One catalog entry. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Where the live demo runs. Shown in the preview overlay.
    pub demo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Portfolio {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let portfolio: Portfolio = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid manifest: {}", path.display()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// The content shipped with the binary, used when no manifest is given.
    pub fn builtin() -> Self {
        let yaml = include_str!("../../../sample-content/angelina.yaml");
        let portfolio: Portfolio =
            serde_yaml::from_str(yaml).expect("built-in manifest is well-formed");
        portfolio
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Manifest has no name");
        }
        for project in &self.projects {
            if project.title.trim().is_empty() {
                anyhow::bail!("A project is missing its title");
            }
            if project.demo_url.trim().is_empty() {
                anyhow::bail!("Project '{}' has no demo_url", project.title);
            }
            if !HTTP_URL.is_match(&project.demo_url) {
                anyhow::bail!(
                    "Project '{}' has a demo_url that is not an http(s) URL: {}",
                    project.title,
                    project.demo_url
                );
            }
        }
        for link in &self.contact {
            if link.label.trim().is_empty() || link.url.trim().is_empty() {
                anyhow::bail!("Contact links need both a label and a url");
            }
        }
        Ok(())
    }

    /// Look up a project by its title.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let portfolio = Portfolio::builtin();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.name, "Angelina Nguyen");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.contact.is_empty());
    }

    #[test]
    fn builtin_content_has_wordle_demo() {
        let portfolio = Portfolio::builtin();
        let idx = portfolio.index_of("Wordle Game").expect("Wordle Game entry");
        assert_eq!(
            portfolio.projects[idx].demo_url,
            "https://wordle-xi-one.vercel.app/"
        );
    }

    #[test]
    fn index_of_unknown_title_is_none() {
        let portfolio = Portfolio::builtin();
        assert_eq!(portfolio.index_of("No Such Project"), None);
    }

    #[test]
    fn parses_minimal_manifest() {
        let yaml = "name: Test Person\nprojects:\n  - title: Demo\n    demo_url: https://example.com/\n";
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.projects.len(), 1);
        assert!(portfolio.tagline.is_empty());
        assert!(portfolio.footer.is_none());
    }

    #[test]
    fn rejects_empty_name() {
        let yaml = "name: \"  \"\n";
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn rejects_missing_demo_url() {
        let yaml = "name: Test\nprojects:\n  - title: Demo\n    demo_url: \"\"\n";
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn rejects_non_http_demo_url() {
        let yaml = "name: Test\nprojects:\n  - title: Demo\n    demo_url: ftp://example.com/\n";
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn rejects_empty_contact_label() {
        let yaml = "name: Test\ncontact:\n  - label: \"\"\n    url: https://example.com/\n";
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.validate().is_err());
    }
}

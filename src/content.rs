use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::ContactConfig;
use crate::theme::Accent;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("falling back to empty portfolio: {e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("embedded content file `{0}` is missing")]
    Missing(&'static str),
    #[error("content is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub availability: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub resume: String,
    pub resume_download_name: String,
    pub avatar: Option<String>,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub skills: Vec<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub program: String,
    pub issuer: String,
    pub date: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub credential_url: String,
    pub credential_id: String,
    pub image: Option<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub status: String,
    /// Percent complete, 0 to 100.
    pub progress: u8,
    pub accent: Accent,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub github: String,
    pub demo: Option<String>,
    pub featured: bool,
    pub category: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub href: String,
}

/// All hand-authored content rendered by the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub tech_stack: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub highlights: Vec<Highlight>,
    pub skill_groups: Vec<SkillGroup>,
    pub skill_categories: Vec<SkillCategory>,
    pub certifications: Vec<Certificate>,
    pub learning: Vec<LearningItem>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file =
            ContentAssets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
        let text = String::from_utf8(file.data.into_owned())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_str::<Portfolio>(text)?;
        portfolio.check()?;
        Ok(portfolio)
    }

    fn check(&self) -> Result<(), ContentError> {
        if let Some(item) = self.learning.iter().find(|l| l.progress > 100) {
            return Err(ContentError::Invalid(format!(
                "learning item `{}` has progress {} over 100",
                item.title, item.progress
            )));
        }
        let mut ids = HashSet::new();
        if let Some(cert) = self.certifications.iter().find(|c| !ids.insert(c.id)) {
            return Err(ContentError::Invalid(format!(
                "duplicate certificate id {}",
                cert.id
            )));
        }
        Ok(())
    }

    pub fn contact_config(&self) -> ContactConfig {
        ContactConfig::new(self.profile.email.clone())
    }

    /// Distinct skills across all categories, in first-seen order.
    pub fn all_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.skill_categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

/// Letter shown in place of a missing image.
pub fn initial(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded portfolio should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.profile.email.is_empty());
        assert_eq!(portfolio.certifications.len(), 3);
        assert_eq!(portfolio.projects.len(), 5);
        assert!(portfolio.projects.iter().any(|p| p.featured));
        assert!(portfolio.learning.iter().all(|l| l.progress <= 100));
        assert_eq!(&*PORTFOLIO, &portfolio);
    }

    #[test]
    fn test_contact_config_uses_profile_email() {
        let config = PORTFOLIO.contact_config();
        assert_eq!(config.recipient, PORTFOLIO.profile.email);
        assert_eq!(config.min_message_len, crate::contact::MIN_MESSAGE_LEN);
    }

    #[test]
    fn test_rejects_invalid_content() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));

        let mut portfolio = Portfolio::load().unwrap();
        portfolio.learning[0].progress = 120;
        let text = serde_json::to_string(&portfolio).unwrap();
        assert!(matches!(
            Portfolio::from_json(&text),
            Err(ContentError::Invalid(_))
        ));

        let mut portfolio = Portfolio::load().unwrap();
        portfolio.certifications[1].id = portfolio.certifications[0].id;
        let text = serde_json::to_string(&portfolio).unwrap();
        assert!(matches!(
            Portfolio::from_json(&text),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_all_skills_deduplicates() {
        let skills = PORTFOLIO.all_skills();
        let unique = skills.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), skills.len());
        assert!(skills.contains(&"Power BI"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("e-commerce"), "E");
        assert_eq!(initial(""), "");
    }
}

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    load_portfolio().unwrap_or_else(|e| {
        log::error!("{e}, rendering without content");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    NotFound(&'static str),
    #[error("Couldn't parse content: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub socials: SocialLinks,
    pub nav: Vec<NavItem>,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<Achievement>,
    pub contact: Vec<ContactInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Cycled through under the name in the hero banner.
    pub roles: Vec<String>,
    pub image_url: String,
    pub about: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
}

impl SkillCategory {
    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Language => "</>",
            SkillCategory::Framework => "⚙",
            SkillCategory::Tool => "🛠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub repo_url: String,
    pub demo_url: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub kind: ContactKind,
    pub title: String,
    pub value: String,
    pub link: String,
}

impl ContactInfo {
    /// Map links leave the page; `mailto:` and `tel:` hand off to the OS.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == ContactKind::Location
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "✉",
            ContactKind::Phone => "☎",
            ContactKind::Location => "📍",
        }
    }
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound(PORTFOLIO_FILE))?;
    let portfolio = serde_json::from_slice(&file.data)?;
    Ok(portfolio)
}

pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let p = load_portfolio().expect("portfolio.json should parse");
        assert!(!p.profile.name.is_empty());
        assert!(!p.profile.roles.is_empty());
        assert_eq!(p.nav.first().map(|n| n.href.as_str()), Some("#home"));
        assert!(!p.projects.is_empty());
        assert!(!p.certifications.is_empty());
        assert!(!p.education.is_empty());
        assert!(!p.achievements.is_empty());
    }

    #[test]
    fn every_skill_category_is_present() {
        let p = portfolio();
        for category in [
            SkillCategory::Language,
            SkillCategory::Framework,
            SkillCategory::Tool,
        ] {
            assert!(p.skills.iter().any(|s| s.category == category));
        }
    }

    #[test]
    fn project_ids_are_unique() {
        let p = portfolio();
        let mut ids = p.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), p.projects.len());
    }

    #[test]
    fn contact_links_keep_their_schemes() {
        let p = portfolio();
        for info in &p.contact {
            match info.kind {
                ContactKind::Email => assert!(info.link.starts_with("mailto:")),
                ContactKind::Phone => assert!(info.link.starts_with("tel:")),
                ContactKind::Location => assert!(info.opens_new_tab()),
            }
        }
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = serde_json::from_str::<Portfolio>("{\"profile\": 3}")
            .map_err(ContentError::from)
            .unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }
}

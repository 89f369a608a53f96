//! Portfolio content.
//!
//! All copy shown on the site ships inside the binary as JSON and is parsed and
//! cross-checked once at startup with [`Content::embedded`].

pub mod profile;
pub mod projects;
pub mod services;
pub mod skills;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

pub use profile::{ContactMethod, NavLink, Profile, SocialLink};
pub use projects::{ImageSide, ProjectCatalog, ProjectCategory, ProjectDetails, ProjectSummary};
pub use services::{FontStyle, Service};
pub use skills::{SkillCategory, SkillGroup, SkillItem, Skills, Stat};

const PROFILE_JSON: &str = include_str!("../../assets/content/profile.json");
const PROJECTS_JSON: &str = include_str!("../../assets/content/projects.json");
const SKILLS_JSON: &str = include_str!("../../assets/content/skills.json");
const SERVICES_JSON: &str = include_str!("../../assets/content/services.json");
const EXPERIENCE_JSON: &str = include_str!("../../assets/content/experience.json");

/// One entry of the journey timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    /// Lowercase trailing word rendered in italics ("developer", "intern").
    pub role_secondary: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Everything the views render.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub profile: Profile,
    pub projects: ProjectCatalog,
    pub skills: Skills,
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
}

impl Content {
    /// Parse and validate the content embedded at compile time.
    pub fn embedded() -> Result<Self, ContentError> {
        let content = Self {
            profile: parse("profile.json", PROFILE_JSON)?,
            projects: parse("projects.json", PROJECTS_JSON)?,
            skills: parse("skills.json", SKILLS_JSON)?,
            services: parse("services.json", SERVICES_JSON)?,
            experience: parse("experience.json", EXPERIENCE_JSON)?,
        };
        content.validate()?;
        tracing::debug!(
            projects = content.projects.summaries.len(),
            services = content.services.len(),
            skills = content.skills.featured.len(),
            "Loaded portfolio content"
        );
        Ok(content)
    }

    /// Cross-file checks serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.projects.validate()?;
        self.skills.validate()?;
        services::validate(&self.services)?;
        if self.profile.nav_links.is_empty() {
            return Err(ContentError::invalid("profile has no navigation links"));
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.projects.summaries.len(), 7);
        assert_eq!(content.services.len(), 10);
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.profile.nav_links.len(), 6);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse::<Vec<Experience>>("experience.json", "[{]").unwrap_err();
        assert!(matches!(err, ContentError::Parse { file: "experience.json", .. }));
        assert!(err.to_string().starts_with("Failed to parse experience.json"));
    }

    #[test]
    fn test_empty_nav_is_invalid() {
        let mut content = Content::embedded().unwrap();
        content.profile.nav_links.clear();
        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }
}

//! Skills section data.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillGroup {
    Frontend,
    Backend,
    Languages,
    Tools,
}

/// Card with a proficiency bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    pub category: SkillGroup,
    pub description: String,
    pub years_exp: String,
    /// 1..=100
    pub proficiency: u8,
    pub color: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub featured: Vec<SkillItem>,
    pub categories: Vec<SkillCategory>,
    stats: Vec<Stat>,
}

impl Skills {
    /// Headline stats, with the technology count derived from the skill cards.
    pub fn stats(&self) -> Vec<Stat> {
        let mut stats = self.stats.clone();
        let technologies = Stat {
            label: "Technologies".to_string(),
            value: self.featured.len().to_string(),
        };
        stats.insert(1.min(stats.len()), technologies);
        stats
    }

    pub fn in_group(&self, group: SkillGroup) -> impl Iterator<Item = &SkillItem> {
        self.featured.iter().filter(move |s| s.category == group)
    }

    /// The highlighted card, or the first one.
    pub fn spotlight(&self) -> Option<&SkillItem> {
        self.featured
            .iter()
            .find(|s| s.featured)
            .or_else(|| self.featured.first())
    }

    pub(crate) fn validate(&self) -> Result<(), ContentError> {
        for skill in &self.featured {
            if !(1..=100).contains(&skill.proficiency) {
                return Err(ContentError::invalid(format!(
                    "skill {} has proficiency {} outside 1..=100",
                    skill.id, skill.proficiency
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn skills() -> Skills {
        Content::embedded().unwrap().skills
    }

    #[test]
    fn test_stats_include_technology_count() {
        let skills = skills();
        let stats = skills.stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].label, "Years Coding");
        assert_eq!(stats[1].label, "Technologies");
        assert_eq!(stats[1].value, "11");
    }

    #[test]
    fn test_spotlight_is_featured() {
        assert_eq!(skills().spotlight().unwrap().id, "react");
    }

    #[test]
    fn test_groups() {
        let skills = skills();
        assert_eq!(skills.in_group(SkillGroup::Backend).count(), 3);
        assert_eq!(skills.in_group(SkillGroup::Languages).count(), 3);
    }

    #[test]
    fn test_proficiency_range_checked() {
        let mut skills = skills();
        skills.featured[0].proficiency = 0;
        assert!(skills.validate().is_err());
    }
}

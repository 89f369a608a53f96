//! Work showcase data: short summaries for the cards and full details for the
//! modal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u32,
    pub title: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub id: u32,
    pub title: String,
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub what_i_built: Vec<String>,
    pub key_features: Vec<String>,
    pub technical_highlights: Vec<String>,
    pub impact_results: Vec<String>,
    pub technologies_used: Vec<String>,
    pub my_role: String,
}

/// Side of the card the image sits on. Categories alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    Right,
}

/// Projects of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCategory<'a> {
    pub title: &'a str,
    pub projects: Vec<&'a ProjectSummary>,
    pub image_side: ImageSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub summaries: Vec<ProjectSummary>,
    pub details: Vec<ProjectDetails>,
}

impl ProjectCatalog {
    pub fn summary(&self, id: u32) -> Option<&ProjectSummary> {
        self.summaries.iter().find(|p| p.id == id)
    }

    pub fn details(&self, id: u32) -> Option<&ProjectDetails> {
        self.details.iter().find(|p| p.id == id)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ProjectSummary> {
        self.summaries.iter().filter(move |p| p.category == category)
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.summaries
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Projects grouped by category with alternating image sides.
    pub fn grouped(&self) -> Vec<ProjectCategory<'_>> {
        self.categories()
            .into_iter()
            .enumerate()
            .map(|(i, title)| ProjectCategory {
                title,
                projects: self.by_category(title).collect(),
                image_side: if i % 2 == 0 { ImageSide::Left } else { ImageSide::Right },
            })
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for project in &self.summaries {
            if !ids.insert(project.id) {
                return Err(ContentError::invalid(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            if self.details(project.id).is_none() {
                return Err(ContentError::invalid(format!(
                    "project {} ({}) has no details",
                    project.id, project.title
                )));
            }
        }
        Ok(())
    }
}

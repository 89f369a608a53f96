//! Owner profile, navigation and outbound links.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub title: String,
    pub meta_description: String,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub cta: CtaCopy,
    pub email: String,
    /// File name of the resume inside the data directory.
    pub resume_path: String,
    pub nav_links: Vec<NavLink>,
    pub socials: Vec<SocialLink>,
    pub contact_methods: Vec<ContactMethod>,
}

impl Profile {
    /// "Abdul Rehman"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `mailto:` link for the owner's address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub eyebrow_emphasis: String,
    /// Words revealed one by one before the gradient last name.
    pub greeting_words: Vec<String>,
    pub bio: String,
    pub cta_label: String,
    pub badges: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutCopy {
    pub heading: String,
    pub statement: String,
    pub availability: String,
    pub intro_lines: Vec<IntroLine>,
}

/// A line of the scroll-parallax intro block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroLine {
    pub text: String,
    pub italic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaCopy {
    pub eyebrow: String,
    pub heading: String,
    /// Gradient italic phrase after the heading.
    pub heading_emphasis: String,
    pub heading_tail: String,
    pub body: String,
    pub primary_label: String,
    pub primary_href: String,
    pub secondary_label: String,
    pub secondary_href: String,
}

/// Numbered entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    /// In-page anchor, e.g. `#work`.
    pub path: String,
    pub number: String,
}

impl NavLink {
    /// Element id the anchor points at, without the `#`.
    pub fn anchor_id(&self) -> &str {
        self.path.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Card in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub name: String,
    pub value: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use crate::content::Content;

    #[test]
    fn test_display_name_and_mailto() {
        let profile = Content::embedded().unwrap().profile;
        assert_eq!(profile.display_name(), "Abdul Rehman");
        assert_eq!(profile.mailto(), format!("mailto:{}", profile.email));
    }

    #[test]
    fn test_nav_anchors() {
        let profile = Content::embedded().unwrap().profile;
        let anchors: Vec<_> = profile.nav_links.iter().map(|l| l.anchor_id()).collect();
        assert_eq!(anchors, ["top", "about", "work", "services", "skills", "contact"]);
    }
}

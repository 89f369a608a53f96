//! Process-wide site data and the context handed to components.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::ui::timing;
use folio_core::{Content, SiteConfig};

/// Content and configuration, fixed for the life of the process.
#[derive(Debug)]
pub struct Site {
    pub content: Content,
    pub config: SiteConfig,
}

static SITE: OnceLock<Site> = OnceLock::new();

/// Install the site. Returns `false` if one was already installed.
pub fn install(site: Site) -> bool {
    SITE.set(site).is_ok()
}

pub(crate) fn installed() -> Option<&'static Site> {
    SITE.get()
}

/// Read-only handles provided at the root.
#[derive(Clone, Copy, PartialEq)]
pub struct SiteContext {
    pub content: &'static Content,
    pub config: &'static SiteConfig,
}

impl SiteContext {
    pub fn new(site: &'static Site) -> Self {
        Self {
            content: &site.content,
            config: &site.config,
        }
    }

    /// A timer duration adjusted by the configured timing scale.
    pub fn delay(&self, duration: Duration) -> Duration {
        timing::scaled(duration, self.config.timing_scale)
    }

    /// Resume file, if present in the data directory.
    pub fn resume(&self) -> Option<PathBuf> {
        let path = self.config.data_dir.join(&self.content.profile.resume_path);
        path.is_file().then_some(path)
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

//! Site configuration.

use std::path::PathBuf;

use crate::storage::{default_data_dir, FileStorage};
use crate::theme::store::THEME_STORAGE_KEY;

/// Runtime settings for the site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Directory holding `preferences.json`.
    pub data_dir: PathBuf,
    /// Preference key the theme name is stored under.
    pub storage_key: String,
    /// Start with the loading screen already finished.
    pub skip_intro: bool,
    /// Multiplier applied to every timer; 1.0 is real time.
    pub timing_scale: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().unwrap_or_else(|| PathBuf::from(".")),
            storage_key: THEME_STORAGE_KEY.to_string(),
            skip_intro: false,
            timing_scale: 1.0,
        }
    }
}

impl SiteConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::new()
    }

    /// File-backed preference storage under `data_dir`.
    pub fn storage(&self) -> FileStorage {
        FileStorage::in_dir(&self.data_dir)
    }
}

/// Largest accepted timing scale.
pub const MAX_TIMING_SCALE: f32 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn skip_intro(mut self, skip: bool) -> Self {
        self.config.skip_intro = skip;
        self
    }

    /// Ignored unless finite and positive; capped at [`MAX_TIMING_SCALE`].
    pub fn timing_scale(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.config.timing_scale = scale.min(MAX_TIMING_SCALE);
        }
        self
    }

    pub fn build(self) -> SiteConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PREFERENCES_FILE;
    use crate::ui::timing::{scaled, CAROUSEL_INTERVAL};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert!(!config.skip_intro);
        assert_eq!(config.timing_scale, 1.0);
    }

    #[test]
    fn test_builder() {
        let config = SiteConfig::builder()
            .data_dir("/tmp/folio-test")
            .storage_key("site-theme")
            .skip_intro(true)
            .timing_scale(0.25)
            .timing_scale(-3.0)
            .build();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/folio-test"));
        assert_eq!(config.storage_key, "site-theme");
        assert!(config.skip_intro);
        assert_eq!(config.timing_scale, 0.25);
        assert_eq!(
            config.storage().path().to_path_buf(),
            PathBuf::from("/tmp/folio-test").join(PREFERENCES_FILE)
        );
    }

    #[test]
    fn test_huge_timing_scale_is_capped() {
        let config = SiteConfig::builder().timing_scale(1e30).build();
        assert_eq!(config.timing_scale, MAX_TIMING_SCALE);
        let delay = scaled(CAROUSEL_INTERVAL, config.timing_scale);
        assert_eq!(delay, Duration::from_secs(400));
    }
}

//! Core logic for the Folio portfolio site.
//!
//! Everything here is renderer-agnostic so it can be tested without a window:
//!
//! - [`theme`]: theme names, the static palette table, the [`ThemeStore`] with its
//!   hydration lifecycle, and the [`StyleAdapter`] seam used for document styling
//! - [`storage`]: preference storage backends (file, in-memory)
//! - [`content`]: the embedded portfolio content (projects, skills, services, ...)
//! - [`ui`]: small state machines behind the views (paging, rotation, modal,
//!   loading phases, contact form) and animation timing constants
//! - [`config`]: site configuration
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use folio_core::{MemoryStorage, NoopStyle, ThemeName, ThemeStore};
//!
//! let mut store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
//! store.hydrate();
//! store.set_theme(ThemeName::Olive);
//! assert_eq!(store.current().name, ThemeName::Olive);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod storage;
pub mod theme;
pub mod ui;

pub use config::{SiteConfig, SiteConfigBuilder};
pub use content::Content;
pub use error::{ContentError, FormError, StorageError, ThemeError};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use theme::palette::Palette;
pub use theme::store::{Lifecycle, SubscriptionId, ThemeSnapshot, ThemeStore};
pub use theme::style::{DocumentStyle, NoopStyle, StyleAdapter, ThemeClassList};
pub use theme::ThemeName;

//! Desktop portfolio site.
//!
//! The launcher in `main.rs` parses arguments, sets up logging and installs a
//! [`Site`] before handing control to Dioxus. Everything below the root reads
//! it through [`SiteContext`] and the theme through [`theme::ThemeContext`].

pub mod components;
pub mod links;
pub mod site;
pub mod theme;

pub use site::{install, Site, SiteContext};

//! UI components for the portfolio site.

mod about;
mod app;
mod contact;
mod cta;
mod footer;
mod heading;
mod hero;
mod icons;
mod loading;
mod navbar;
mod project_modal;
mod services;
mod skills;
mod theme_toggler;
mod work;

pub use about::{AboutInfo, AboutSection, MyJourney, WhoAmI};
pub use app::App;
pub use contact::ContactSection;
pub use cta::CtaSection;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use navbar::Navbar;
pub use project_modal::ProjectModal;
pub use services::ServicesSection;
pub use skills::SkillsSection;
pub use theme_toggler::ThemeToggler;
pub use work::WorkSection;

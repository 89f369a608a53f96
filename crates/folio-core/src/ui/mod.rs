//! View-independent state behind the site's interactive sections.
//!
//! Each type here is a small value the Dioxus components keep in a signal and
//! mutate from event handlers or timers. Keeping them out of the component
//! bodies lets the paging, rotation and form rules be unit tested.

pub mod contact;
pub mod loading;
pub mod modal;
pub mod motion;
pub mod pager;
pub mod rotation;
pub mod timing;

pub use contact::ContactForm;
pub use loading::LoadingPhase;
pub use modal::ModalState;
pub use pager::Pager;
pub use rotation::Rotation;

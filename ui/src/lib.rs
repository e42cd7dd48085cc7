//! Shared UI crate for the Sierra Villa site. Controllers, views and the
//! language layer live here; the `web` crate only launches them.

pub mod booking;
pub mod core;
pub mod gallery;
pub mod i18n;
pub mod views;

pub mod components {
    // Header: brand, section links, hamburger toggle, language buttons.
    pub mod site_navbar;
    pub use site_navbar::{MenuState, SiteNavbar};

    // Root `lang` attribute, title and meta tags.
    pub mod document_language;
    pub use document_language::DocumentLanguage;
}

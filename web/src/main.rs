use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use ui::booking::{BookingDialog, BookingDialogState};
use ui::components::{DocumentLanguage, SiteNavbar};
use ui::core::config::SiteConfig;
use ui::i18n::{self, TextLayer};
use ui::views::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_JSON: &str = include_str!("../site.json");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_JSON) {
        Ok(config) => config,
        Err(err) => {
            warn!("[config] {err}; using built-in defaults");
            SiteConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    // Language is settled once, before the first render, so visitors never
    // see the authored text flash into their preferred language.
    use_context_provider(move || {
        let lang = i18n::detect_language(&config);
        info!("[i18n] start-up language={}", lang.code());
        Signal::new(TextLayer::authored().applied(lang))
    });
    use_context_provider(|| Signal::new(BookingDialogState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DocumentLanguage {}
        SiteNavbar {}
        Home {}
        BookingDialog {}
    }
}

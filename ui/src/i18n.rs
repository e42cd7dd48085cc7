//! Two-language (Indonesian / English) text layer for the page.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the `.ftl` tables)
//! - `fluent` (one bundle per language; lookups never fall back across languages)
//! - `i18n-embed` requesters (browser / OS locale for the first visit)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   id-ID/sierra-villa.ftl   (markup language, authored text)
//!   en-US/sierra-villa.ftl
//! ```
//!
//! Views read tagged text through the [`t!`](crate::t) macro, which resolves
//! against the [`TextLayer`] signal provided at the app root:
//! ```ignore
//! let layer = use_signal(|| TextLayer::authored().applied(detect_language(&config)));
//! use_context_provider(|| layer);
//! rsx! { h1 { {t!("hero-title")} } }
//! ```
//!
//! `TextLayer::apply` rewrites tagged strings in place: a key missing from the
//! chosen language keeps whatever text it showed before.

use std::collections::BTreeMap;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::config::SiteConfig;
use crate::core::platform::MetaTag;
use crate::core::storage;

/// Tagged text lookup for views: `t!("nav-book")`.
///
/// Expands to [`text`], so the calling component re-renders whenever the
/// active language changes.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::text($key)
    };
}

/// Fluent domain (matches the `.ftl` filename in every locale folder).
const DOMAIN: &str = "sierra-villa";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Every translation key attached to an element of the page.
pub const TAGGED_KEYS: &[&str] = &[
    "nav-why",
    "nav-accommodation",
    "nav-amenities",
    "nav-gallery",
    "nav-book",
    "hero-badge",
    "hero-title",
    "hero-desc",
    "hero-cta",
    "why-badge",
    "why-title",
    "why-desc",
    "why-feature-1-title",
    "why-feature-1-desc",
    "why-feature-2-title",
    "why-feature-2-desc",
    "why-feature-3-title",
    "why-feature-3-desc",
    "why-feature-4-title",
    "why-feature-4-desc",
    "why-contact",
    "rooms-badge",
    "rooms-title",
    "rooms-desc",
    "rooms-card1-title",
    "rooms-card1-desc",
    "rooms-card2-title",
    "rooms-card2-desc",
    "rooms-card3-title",
    "rooms-card3-desc",
    "amenities-badge",
    "amenities-title",
    "amenities-desc",
    "amenities-card1-title",
    "amenities-card1-desc",
    "amenities-card2-title",
    "amenities-card2-desc",
    "amenities-card3-title",
    "amenities-card3-desc",
    "amenities-card4-title",
    "amenities-card4-desc",
    "gallery-badge",
    "gallery-title",
    "gallery-desc",
    "cta-badge",
    "cta-title",
    "cta-desc",
    "cta-stats-reviews",
    "cta-stats-guests",
    "cta-stats-support",
    "cta-contact",
    "location-badge",
    "location-title",
    "location-desc",
    "footer-title",
    "footer-desc",
    "booking-title",
    "booking-name",
    "booking-checkin",
    "booking-checkout",
    "booking-persons",
    "booking-phone",
    "booking-email",
    "booking-message",
    "booking-note",
    "booking-cancel",
    "booking-submit",
    "booking-total",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Id,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Id, Lang::En];

    /// Two-letter code used for storage and the root `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Id => "id",
            Lang::En => "en",
        }
    }

    /// Anything other than `en` normalizes to Indonesian.
    pub fn from_code(code: &str) -> Self {
        if code == "en" {
            Lang::En
        } else {
            Lang::Id
        }
    }

    /// Browser-locale heuristic: English only for `en*` locales.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("en") {
            Lang::En
        } else {
            Lang::Id
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::Id => "ID",
            Lang::En => "EN",
        }
    }

    fn locale_dir(self) -> &'static str {
        match self {
            Lang::Id => "id-ID",
            Lang::En => "en-US",
        }
    }

    fn langid(self) -> LanguageIdentifier {
        match self {
            Lang::Id => langid!("id-ID"),
            Lang::En => langid!("en-US"),
        }
    }
}

struct Catalog {
    id: FluentBundle<FluentResource>,
    en: FluentBundle<FluentResource>,
}

impl Catalog {
    fn load() -> Self {
        Self {
            id: load_bundle(Lang::Id),
            en: load_bundle(Lang::En),
        }
    }

    fn bundle(&self, lang: Lang) -> &FluentBundle<FluentResource> {
        match lang {
            Lang::Id => &self.id,
            Lang::En => &self.en,
        }
    }
}

thread_local! {
    static CATALOG: Catalog = Catalog::load();
}

fn load_bundle(lang: Lang) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![lang.langid()]);
    bundle.set_use_isolating(false);

    let path = format!("{}/{DOMAIN}.ftl", lang.locale_dir());
    let Some(file) = Localizations::get(&path) else {
        warn!("[i18n] missing table {path}; {} keys stay untranslated", lang.code());
        return bundle;
    };
    let source = String::from_utf8_lossy(&file.data).into_owned();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            warn!("[i18n] {path}: {} parse error(s), keeping valid entries", errors.len());
            resource
        }
    };
    if let Err(errors) = bundle.add_resource(resource) {
        warn!("[i18n] {path}: {errors:?}");
    }
    bundle
}

/// Look `key` up in the table for `lang` only.
pub fn lookup(lang: Lang, key: &str) -> Option<String> {
    CATALOG.with(|catalog| {
        let bundle = catalog.bundle(lang);
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            warn!("[i18n] formatting {key} ({}): {errors:?}", lang.code());
        }
        Some(value.into_owned())
    })
}

/// Title and social-preview metadata; two literal variants, one per language.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    /// Shared by `meta[name=title]`, `og:title` and `twitter:title`.
    pub headline: &'static str,
    /// Shared by `meta[name=description]`, `og:description` and `twitter:description`.
    pub description: &'static str,
    pub og_locale: &'static str,
}

impl PageMeta {
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::En => Self {
                title: "Sierra Villa - Minimalist Accommodation in Malang",
                headline: "Sierra Villa - Luxury Minimalist Accommodation in Malang",
                description: "Discover Sierra Villa — where modern minimalism meets Indonesian hospitality. 4.9-star rated accommodation in Malang with exceptional service and stunning minimalist interiors.",
                og_locale: "en_US",
            },
            Lang::Id => Self {
                title: "Sierra Villa - Akomodasi Minimalis Terbaik di Malang",
                headline: "Sierra Villa - Akomodasi Mewah Minimalis di Malang",
                description: "Temukan Sierra Villa - tempat minimalis modern bertemu keramahan Indonesia. Akomodasi bintang 4.9 di Malang dengan pelayanan istimewa dan interior minimalis yang memukau.",
                og_locale: "id_ID",
            },
        }
    }

    /// Meta elements rewritten on every language change.
    pub fn tags(&self) -> [MetaTag; 7] {
        let tag = |attr, key, content| MetaTag { attr, key, content };
        [
            tag("name", "title", self.headline),
            tag("name", "description", self.description),
            tag("property", "og:title", self.headline),
            tag("property", "og:description", self.description),
            tag("property", "og:locale", self.og_locale),
            tag("property", "twitter:title", self.headline),
            tag("property", "twitter:description", self.description),
        ]
    }
}

/// Current text of every tagged element plus the active language.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    lang: Lang,
    texts: BTreeMap<String, String>,
}

impl TextLayer {
    /// Tagged elements as the markup ships them (Indonesian).
    pub fn authored() -> Self {
        Self::from_markup(
            TAGGED_KEYS
                .iter()
                .map(|key| (*key, lookup(Lang::Id, key).unwrap_or_default())),
        )
    }

    pub fn from_markup<K, V>(markup: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            lang: Lang::Id,
            texts: markup
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }

    /// Rewrite every tagged element whose key exists for `lang`.
    pub fn apply(&mut self, lang: Lang) {
        let mut missing = 0usize;
        for (key, text) in self.texts.iter_mut() {
            match lookup(lang, key) {
                Some(value) => *text = value,
                None => missing += 1,
            }
        }
        if missing > 0 {
            debug!("[i18n] {missing} tagged key(s) absent for {}", lang.code());
        }
        self.lang = lang;
    }

    pub fn applied(mut self, lang: Lang) -> Self {
        self.apply(lang);
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta::for_lang(self.lang)
    }

    /// Current text of a tagged element (empty for untagged keys).
    pub fn text(&self, key: &str) -> &str {
        self.texts.get(key).map(String::as_str).unwrap_or_default()
    }
}

/// Current text for `key` from the root [`TextLayer`] signal.
pub fn text(key: &str) -> String {
    consume_context::<Signal<TextLayer>>()
        .read()
        .text(key)
        .to_string()
}

/// Explicit visitor choice: persist the code, then rewrite the page.
pub fn choose_language(mut layer: Signal<TextLayer>, storage_key: &str, lang: Lang) {
    if let Err(err) = storage::save_value(storage_key, lang.code()) {
        warn!("[i18n] could not persist lang={} ({err})", lang.code());
    }
    layer.with_mut(|layer| layer.apply(lang));
}

/// Language for a first render: stored preference, else browser locale.
///
/// An unknown stored code (say `fr`) is read as Indonesian, so the page
/// keeps its authored text and the ID button is the active one; there is
/// no state with neither button active.
pub fn initial_language(stored: Option<&str>, locale: Option<&str>) -> Lang {
    match stored.filter(|code| !code.is_empty()) {
        Some(code) => Lang::from_code(code),
        None => Lang::from_locale(locale.unwrap_or("id")),
    }
}

/// Resolve the start-up language from local storage and the visitor's locale.
/// Nothing is persisted here.
pub fn detect_language(config: &SiteConfig) -> Lang {
    let stored = storage::load_value(&config.language_storage_key).unwrap_or_else(|err| {
        warn!("[i18n] reading stored language failed ({err}); using locale");
        None
    });
    let locale = requested_locale();
    let lang = initial_language(stored.as_deref(), locale.as_deref());
    debug!(
        "[i18n] start-up lang={} (stored={stored:?}, locale={locale:?})",
        lang.code()
    );
    lang
}

#[cfg(target_arch = "wasm32")]
fn requested_locale() -> Option<String> {
    i18n_embed::WebLanguageRequester::requested_languages()
        .first()
        .map(|lang| lang.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_locale() -> Option<String> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
        .first()
        .map(|lang| lang.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_stay_within_one_language() {
        assert_eq!(lookup(Lang::Id, "nav-book").as_deref(), Some("Pesan Sekarang"));
        assert_eq!(lookup(Lang::En, "nav-book").as_deref(), Some("Book Now"));
        assert_eq!(lookup(Lang::En, "no-such-key"), None);
    }

    #[test]
    fn authored_layer_shows_indonesian() {
        let layer = TextLayer::authored();
        assert_eq!(layer.lang(), Lang::Id);
        assert_eq!(layer.text("booking-cancel"), "Batal");
        assert_eq!(layer.text("untagged"), "");
    }

    #[test]
    fn english_then_indonesian_restores_markup() {
        let authored = TextLayer::authored();
        let mut layer = authored.clone();

        layer.apply(Lang::En);
        assert_eq!(layer.text("hero-cta"), "Book Now");
        assert_ne!(layer, authored);

        layer.apply(Lang::Id);
        assert_eq!(layer, authored);
    }

    #[test]
    fn keys_missing_from_the_table_keep_their_text() {
        let mut layer = TextLayer::from_markup([("nav-gallery", "Galeri"), ("villa-name", "Sierra Villa")]);
        layer.apply(Lang::En);
        assert_eq!(layer.text("nav-gallery"), "Gallery");
        assert_eq!(layer.text("villa-name"), "Sierra Villa");
        assert_eq!(layer.lang(), Lang::En);
    }

    #[test]
    fn placeholders_use_the_last_table_entry() {
        assert_eq!(
            lookup(Lang::Id, "booking-note").as_deref(),
            Some("Pesan khusus atau permintaan tambahan")
        );
        assert_eq!(
            lookup(Lang::En, "booking-note").as_deref(),
            Some("Add your additional notes")
        );
    }

    #[test]
    fn metadata_switches_between_literal_variants() {
        let en = PageMeta::for_lang(Lang::En);
        let id = PageMeta::for_lang(Lang::Id);
        assert_eq!(en.og_locale, "en_US");
        assert_eq!(id.og_locale, "id_ID");
        assert_eq!(id.title, "Sierra Villa - Akomodasi Minimalis Terbaik di Malang");
        assert_eq!(TextLayer::authored().applied(Lang::En).meta(), en);

        let tags = en.tags();
        assert!(tags
            .iter()
            .any(|t| t.attr == "property" && t.key == "og:locale" && t.content == "en_US"));
        assert_eq!(
            tags.iter().filter(|t| t.content == en.description).count(),
            3
        );
    }

    #[test]
    fn codes_normalize_to_indonesian() {
        assert_eq!(Lang::from_code("en"), Lang::En);
        assert_eq!(Lang::from_code("id"), Lang::Id);
        assert_eq!(Lang::from_code("fr"), Lang::Id);
        assert_eq!(Lang::En.code(), "en");
    }

    #[test]
    fn start_up_language_prefers_storage_then_locale() {
        assert_eq!(initial_language(Some("en"), Some("id-ID")), Lang::En);
        assert_eq!(initial_language(Some("id"), Some("en-GB")), Lang::Id);
        assert_eq!(initial_language(None, Some("en-US")), Lang::En);
        assert_eq!(initial_language(Some(""), Some("en")), Lang::En);
        assert_eq!(initial_language(None, Some("de-DE")), Lang::Id);
        assert_eq!(initial_language(None, None), Lang::Id);
    }

    #[test]
    fn unknown_stored_code_reads_as_indonesian() {
        let lang = initial_language(Some("fr"), Some("en-US"));
        assert_eq!(lang, Lang::Id);
        assert_eq!(lang.code(), "id");

        let active: Vec<_> = Lang::ALL.into_iter().filter(|l| *l == lang).collect();
        assert_eq!(active, vec![Lang::Id]);

        let layer = TextLayer::authored().applied(lang);
        assert_eq!(layer, TextLayer::authored());
    }

    #[test]
    fn detection_does_not_persist() {
        let config = SiteConfig {
            language_storage_key: "i18n-test-detect".to_string(),
            ..SiteConfig::default()
        };
        let _ = detect_language(&config);
        assert_eq!(storage::load_value("i18n-test-detect").unwrap(), None);

        storage::save_value("i18n-test-detect", "en").unwrap();
        assert_eq!(detect_language(&config), Lang::En);
    }
}

use dioxus::prelude::*;

use crate::core::platform;
use crate::i18n::{PageMeta, TextLayer};

/// Keeps the root `lang` attribute, the title and the social-preview meta
/// tags in step with the active language. Renders nothing.
#[component]
pub fn DocumentLanguage() -> Element {
    let layer = use_context::<Signal<TextLayer>>();
    let lang = use_memo(move || layer.read().lang());

    use_effect(move || {
        let lang = lang();
        let meta = PageMeta::for_lang(lang);
        platform::set_document_lang(lang.code());
        platform::apply_page_meta(meta.title, &meta.tags());
    });

    rsx! {}
}

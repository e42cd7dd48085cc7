//! Thin wrappers over the handful of browser APIs the page touches.
//!
//! On WASM these go through `web-sys`; native builds (tests, SSR previews)
//! only log what would have happened.

#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

/// Set the `lang` attribute of the document root element.
#[cfg(target_arch = "wasm32")]
pub fn set_document_lang(code: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if root.set_attribute("lang", code).is_err() {
            warn!("[platform] could not set document lang={code}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_lang(code: &str) {
    debug!("[platform] document lang={code}");
}

/// Toggle `overflow: hidden` on the body while a modal is shown.
#[cfg(target_arch = "wasm32")]
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let outcome = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if outcome.is_err() {
        warn!("[platform] could not update body scroll lock (locked={locked})");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_scroll_lock(locked: bool) {
    debug!("[platform] scroll lock={locked}");
}

/// Open `url` in a new browsing context. Fire-and-forget.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        warn!("[platform] window.open rejected");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) {
    debug!("[platform] open {url}");
}

/// A `<meta>` element addressed by `name=` or `property=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag {
    /// `"name"` or `"property"`.
    pub attr: &'static str,
    pub key: &'static str,
    pub content: &'static str,
}

impl MetaTag {
    /// CSS selector matching this tag's element, e.g. `meta[property="og:title"]`.
    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attr, self.key)
    }
}

/// Rewrite the document title and the given meta elements in place,
/// creating any meta element the page does not carry yet.
#[cfg(target_arch = "wasm32")]
pub fn apply_page_meta(title: &str, tags: &[MetaTag]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);

    for tag in tags {
        let selector = tag.selector();
        let element = match document.query_selector(&selector).ok().flatten() {
            Some(element) => element,
            None => {
                let Ok(element) = document.create_element("meta") else {
                    warn!("[platform] could not create {selector}");
                    continue;
                };
                if element.set_attribute(tag.attr, tag.key).is_err() {
                    warn!("[platform] could not address {selector}");
                    continue;
                }
                let Some(head) = document.head() else {
                    warn!("[platform] no <head>; {selector} not written");
                    continue;
                };
                if head.append_child(&element).is_err() {
                    warn!("[platform] could not insert {selector}");
                    continue;
                }
                element
            }
        };
        if element.set_attribute("content", tag.content).is_err() {
            warn!("[platform] could not update {selector}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_page_meta(title: &str, tags: &[MetaTag]) {
    debug!("[platform] title={title:?} ({} meta tags)", tags.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_selectors_address_name_and_property_tags() {
        let og = MetaTag {
            attr: "property",
            key: "og:locale",
            content: "id_ID",
        };
        assert_eq!(og.selector(), r#"meta[property="og:locale"]"#);

        let description = MetaTag {
            attr: "name",
            key: "description",
            content: "",
        };
        assert_eq!(description.selector(), r#"meta[name="description"]"#);
    }

    #[test]
    fn native_stand_ins_accept_every_page_meta_tag() {
        let meta = crate::i18n::PageMeta::for_lang(crate::i18n::Lang::En);
        apply_page_meta(meta.title, &meta.tags());
        set_document_lang("en");
        set_scroll_lock(true);
        set_scroll_lock(false);
    }
}

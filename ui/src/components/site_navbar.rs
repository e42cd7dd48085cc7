use dioxus::prelude::*;

use crate::booking::{open_booking, BookingDialogState};
use crate::core::config::SiteConfig;
use crate::i18n::{self, Lang, TextLayer};
use crate::t;

/// Section anchors in page order, each with its tagged label key.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#why", "nav-why"),
    ("#accommodation", "nav-accommodation"),
    ("#amenities", "nav-amenities"),
    ("#gallery", "nav-gallery"),
];

/// Hamburger menu state: the toggle and the nav list share one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn class(self, base: &str) -> String {
        if self.open {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

#[component]
pub fn SiteNavbar() -> Element {
    let config = use_context::<SiteConfig>();
    let layer = use_context::<Signal<TextLayer>>();
    let dialog = use_context::<Signal<BookingDialogState>>();
    let mut menu = use_signal(MenuState::default);

    let active_lang = layer.read().lang();
    let labels: Vec<(&'static str, String)> = NAV_LINKS
        .iter()
        .map(|(href, key)| (*href, i18n::text(key)))
        .collect();

    rsx! {
        header { id: "navbar", class: "header",
            div { class: "header-inner",
                a { class: "logo", href: "#", "Sierra Villa" }

                nav { class: menu().class("nav"),
                    ul { class: "nav-list",
                        for (href, label) in labels.into_iter() {
                            li { key: "{href}",
                                a {
                                    class: "nav-link",
                                    href,
                                    onclick: move |_| menu.with_mut(MenuState::close),
                                    "{label}"
                                }
                            }
                        }
                        li {
                            button {
                                r#type: "button",
                                class: "nav-link booking-btn",
                                onclick: move |_| {
                                    menu.with_mut(MenuState::close);
                                    open_booking(dialog);
                                },
                                {t!("nav-book")}
                            }
                        }
                    }
                }

                div { class: "lang-switch",
                    for lang in Lang::ALL {
                        button {
                            key: "{lang.code()}",
                            r#type: "button",
                            class: if lang == active_lang { "lang-btn active" } else { "lang-btn" },
                            "data-lang": lang.code(),
                            onclick: {
                                let storage_key = config.language_storage_key.clone();
                                move |_| i18n::choose_language(layer, &storage_key, lang)
                            },
                            "{lang.label()}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: menu().class("hamburger"),
                    aria_label: "Menu",
                    onclick: move |_| menu.with_mut(MenuState::toggle),
                    span { class: "hamburger-line" }
                    span { class: "hamburger-line" }
                    span { class: "hamburger-line" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_drives_both_elements_together() {
        let mut menu = MenuState::default();
        assert_eq!(menu.class("hamburger"), "hamburger");
        menu.toggle();
        assert_eq!(menu.class("hamburger"), "hamburger active");
        assert_eq!(menu.class("nav"), "nav active");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_always_closes() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert_eq!(menu.class("nav"), "nav");
    }
}

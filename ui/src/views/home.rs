use dioxus::prelude::*;

use crate::booking::{open_booking, BookingDialogState};
use crate::core::config::SiteConfig;
use crate::core::whatsapp;
use crate::gallery::GalleryCarousel;
use crate::i18n::{self, TextLayer};
use crate::t;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    dioxus::logger::tracing::debug!("[i18n] Home render (lang={lang})");
}

/// Feature tiles: (icon, title key, description key).
const WHY_FEATURES: &[(&str, &str, &str)] = &[
    ("★", "why-feature-1-title", "why-feature-1-desc"),
    ("◻", "why-feature-2-title", "why-feature-2-desc"),
    ("♢", "why-feature-3-title", "why-feature-3-desc"),
    ("⌖", "why-feature-4-title", "why-feature-4-desc"),
];

/// Room cards: (image, title key, description key).
const ROOMS: &[(&str, &str, &str)] = &[
    ("./images/rooms/living-room.jpeg", "rooms-card1-title", "rooms-card1-desc"),
    ("./images/rooms/bedroom.jpeg", "rooms-card2-title", "rooms-card2-desc"),
    ("./images/rooms/pool.jpeg", "rooms-card3-title", "rooms-card3-desc"),
];

const AMENITIES: &[(&str, &str, &str)] = &[
    ("wifi", "amenities-card1-title", "amenities-card1-desc"),
    ("pool", "amenities-card2-title", "amenities-card2-desc"),
    ("parking", "amenities-card3-title", "amenities-card3-desc"),
    ("access", "amenities-card4-title", "amenities-card4-desc"),
];

const MAP_EMBED: &str = "https://www.google.com/maps?q=Sierra+Villa+Malang&output=embed";

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let layer = use_context::<Signal<TextLayer>>();
    let dialog = use_context::<Signal<BookingDialogState>>();

    let lang = layer.read().lang();
    #[cfg(debug_assertions)]
    {
        log_home_render(lang.code());
    }

    // Chat links carry the prefill sentence of the active language.
    let chat_href = whatsapp::with_text(&config.messaging_base(), whatsapp::prefill_text(lang));

    let card_rows = |cards: &[(&'static str, &'static str, &'static str)]| {
        cards
            .iter()
            .map(|(extra, title, desc)| (*extra, i18n::text(title), i18n::text(desc)))
            .collect::<Vec<_>>()
    };
    let features = card_rows(WHY_FEATURES);
    let rooms = card_rows(ROOMS);
    let amenities = card_rows(AMENITIES);

    rsx! {
        main { class: "page page-home",
            section { id: "hero", class: "hero",
                div { class: "hero-content",
                    span { class: "badge", {t!("hero-badge")} }
                    h1 { class: "hero-title", {t!("hero-title")} }
                    p { class: "hero-desc", {t!("hero-desc")} }
                    button {
                        r#type: "button",
                        class: "btn btn-primary booking-btn",
                        onclick: move |_| open_booking(dialog),
                        {t!("hero-cta")}
                    }
                }
            }

            section { id: "why", class: "section why",
                div { class: "section-header",
                    span { class: "badge", {t!("why-badge")} }
                    h2 { {t!("why-title")} }
                    p { {t!("why-desc")} }
                }
                div { class: "features-grid",
                    for (icon, title, desc) in features.into_iter() {
                        div { key: "{title}", class: "feature-card",
                            span { class: "feature-icon", aria_hidden: "true", "{icon}" }
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                }
                a { class: "btn btn-outline whatsapp-link", href: "{chat_href}", target: "_blank", rel: "noopener",
                    {t!("why-contact")}
                }
            }

            section { id: "accommodation", class: "section rooms",
                div { class: "section-header",
                    span { class: "badge", {t!("rooms-badge")} }
                    h2 { {t!("rooms-title")} }
                    p { {t!("rooms-desc")} }
                }
                div { class: "rooms-grid",
                    for (image, title, desc) in rooms.into_iter() {
                        div { key: "{image}", class: "room-card",
                            img { class: "room-image", src: image, alt: "{title}" }
                            div { class: "room-body",
                                h3 { "{title}" }
                                p { "{desc}" }
                            }
                        }
                    }
                }
            }

            section { id: "amenities", class: "section amenities",
                div { class: "section-header",
                    span { class: "badge", {t!("amenities-badge")} }
                    h2 { {t!("amenities-title")} }
                    p { {t!("amenities-desc")} }
                }
                div { class: "amenities-grid",
                    for (kind, title, desc) in amenities.into_iter() {
                        div { key: "{kind}", class: "amenity-card amenity-{kind}",
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                }
            }

            section { id: "gallery", class: "section gallery",
                div { class: "section-header",
                    span { class: "badge", {t!("gallery-badge")} }
                    h2 { {t!("gallery-title")} }
                    p { {t!("gallery-desc")} }
                }
                GalleryCarousel {}
            }

            section { id: "cta", class: "section cta",
                span { class: "badge", {t!("cta-badge")} }
                h2 { {t!("cta-title")} }
                p { {t!("cta-desc")} }
                div { class: "cta-stats",
                    div { class: "stat",
                        strong { "4.9" }
                        span { {t!("cta-stats-reviews")} }
                    }
                    div { class: "stat",
                        strong { "500+" }
                        span { {t!("cta-stats-guests")} }
                    }
                    div { class: "stat",
                        strong { "24/7" }
                        span { {t!("cta-stats-support")} }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary booking-btn",
                    onclick: move |_| open_booking(dialog),
                    {t!("cta-contact")}
                }
            }

            section { id: "location", class: "section location",
                div { class: "section-header",
                    span { class: "badge", {t!("location-badge")} }
                    h2 { {t!("location-title")} }
                    p { {t!("location-desc")} }
                }
                iframe {
                    class: "location-map",
                    src: MAP_EMBED,
                    title: "Sierra Villa, Malang",
                }
            }

            footer { class: "footer",
                h3 { {t!("footer-title")} }
                p { {t!("footer-desc")} }
                a { class: "whatsapp-link", href: "{chat_href}", target: "_blank", rel: "noopener",
                    "WhatsApp +{config.recipient_phone}"
                }
                p { class: "footer-copy", "© Sierra Villa" }
            }
        }
    }
}

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::timing;

use super::engine::{Direction, GalleryState};

#[component]
pub fn GalleryCarousel() -> Element {
    let config = use_context::<SiteConfig>();
    let mut state = use_signal({
        let config = config.clone();
        move || GalleryState::new(config.gallery_images.clone(), config.images_per_view)
    });

    // Autoplay runs for the page's lifetime; manual navigation does not reset it.
    let interval_ms = config.autoplay_interval_ms;
    use_future(move || async move {
        loop {
            timing::sleep_ms(interval_ms).await;
            state.with_mut(GalleryState::autoplay_tick);
            debug!("[gallery] autoplay start={}", state.peek().start());
        }
    });

    let snapshot = state();
    let items: Vec<GalleryItem> = snapshot
        .images()
        .iter()
        .enumerate()
        .map(|(index, file)| GalleryItem {
            index,
            src: config.gallery_path(file),
            column: snapshot.column_of(index),
        })
        .collect();

    rsx! {
        div { class: "gallery-carousel",
            div { class: "gallery-grid",
                for item in items.into_iter() {
                    {render_item(item)}
                }
            }

            div { class: "gallery-controls",
                button {
                    r#type: "button",
                    id: "gallery-prev",
                    class: "gallery-nav",
                    aria_label: "Previous",
                    disabled: snapshot.prev_disabled(),
                    onclick: move |_| state.with_mut(|gallery| gallery.advance(Direction::Backward)),
                    "‹"
                }
                div { class: "gallery-dots",
                    for position in 0..snapshot.positions() {
                        button {
                            key: "{position}",
                            r#type: "button",
                            class: if snapshot.is_active_position(position) { "gallery-dot active" } else { "gallery-dot" },
                            "data-position": "{position}",
                            onclick: move |_| state.with_mut(|gallery| gallery.jump_to(position)),
                        }
                    }
                }
                button {
                    r#type: "button",
                    id: "gallery-next",
                    class: "gallery-nav",
                    aria_label: "Next",
                    disabled: snapshot.next_disabled(),
                    onclick: move |_| state.with_mut(|gallery| gallery.advance(Direction::Forward)),
                    "›"
                }
            }
        }
    }
}

struct GalleryItem {
    index: usize,
    src: String,
    column: Option<usize>,
}

fn render_item(item: GalleryItem) -> Element {
    let GalleryItem { index, src, column } = item;
    let number = index + 1;
    let (class, style) = match column {
        Some(column) => ("gallery-item active", format!("display: block; grid-column: {column};")),
        None => ("gallery-item", "display: none;".to_string()),
    };

    rsx! {
        div { key: "{index}", class, style, "data-index": "{index}",
            img {
                class: "gallery-image",
                src: "{src}",
                alt: "Sierra Villa Gallery Image {number}",
            }
        }
    }
}

use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::{platform, timing, whatsapp};
use crate::i18n::TextLayer;
use crate::t;

use super::draft::{compose_message, BookingDialogState, DialogEvent};

/// Forwards Escape presses anywhere in the document to the dialog.
const ESCAPE_LISTENER_JS: &str = r#"
document.addEventListener('keydown', (e) => {
    if (e.key === 'Escape') {
        dioxus.send(e.key);
    }
});
"#;

/// Open the booking dialog from any call-to-action on the page.
pub fn open_booking(mut dialog: Signal<BookingDialogState>) {
    dialog.with_mut(|state| state.open(timing::today()));
}

#[component]
pub fn BookingDialog() -> Element {
    let config = use_context::<SiteConfig>();
    let layer = use_context::<Signal<TextLayer>>();
    let mut dialog = use_context::<Signal<BookingDialogState>>();
    let mut name_input = use_signal(|| Option::<Rc<MountedData>>::None);

    // Scroll lock and the delayed first-field focus follow open/closed
    // transitions only, not every keystroke in the draft.
    let locked = use_memo(move || dialog.read().scroll_locked());
    let focus_delay_ms = config.focus_delay_ms;
    use_effect(move || {
        let open = locked();
        platform::set_scroll_lock(open);
        if open {
            spawn(async move {
                timing::sleep_ms(focus_delay_ms).await;
                let input = name_input.peek().clone();
                if let Some(input) = input {
                    if let Err(err) = input.set_focus(true).await {
                        warn!("[booking] focusing name field failed: {err:?}");
                    }
                }
            });
        }
    });

    use_future(move || async move {
        let mut listener = document::eval(ESCAPE_LISTENER_JS);
        while let Ok(key) = listener.recv::<String>().await {
            if key == "Escape" && dialog.peek().is_open() {
                dialog.with_mut(|state| state.handle(DialogEvent::Escape));
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = layer.read().lang();
        let draft = dialog.read().draft.clone();
        match compose_message(&draft, lang) {
            Ok(message) => {
                let link = whatsapp::send_link(&config, &message);
                info!("[booking] sending request (lang={})", lang.code());
                platform::open_in_new_tab(&link);
                dialog.with_mut(|state| state.handle(DialogEvent::Submitted));
            }
            Err(err) => warn!("[booking] not sent: {err}"),
        }
    };

    let state = dialog();
    let draft = state.draft.clone();

    rsx! {
        div {
            id: "booking-popup",
            class: if state.is_open() { "booking-popup active" } else { "booking-popup" },
            // Backdrop only: clicks inside the content stop propagating below.
            onclick: move |_| {
                dialog.with_mut(|state| state.handle(DialogEvent::Backdrop));
            },

            div {
                class: "booking-content",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| {
                    evt.stop_propagation();
                    dialog.with_mut(|state| state.handle(DialogEvent::ContentClick));
                },

                div { class: "booking-header",
                    h2 { {t!("booking-title")} }
                    button {
                        r#type: "button",
                        id: "booking-close",
                        class: "booking-close",
                        aria_label: "Close",
                        onclick: move |_| {
                            dialog.with_mut(|state| state.handle(DialogEvent::CloseButton));
                        },
                        "×"
                    }
                }

                form { id: "booking-form", class: "booking-form", onsubmit: on_submit,
                    div { class: "form-group",
                        label { r#for: "booking-name", {t!("booking-name")} }
                        input {
                            id: "booking-name",
                            name: "name",
                            r#type: "text",
                            required: true,
                            value: "{draft.name}",
                            onmounted: move |evt: MountedEvent| name_input.set(Some(evt.data())),
                            oninput: move |evt| dialog.with_mut(|s| s.draft.name = evt.value()),
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-group",
                            label { r#for: "booking-checkin", {t!("booking-checkin")} }
                            input {
                                id: "booking-checkin",
                                name: "checkin",
                                r#type: "date",
                                required: true,
                                min: "{state.checkin_min()}",
                                value: "{draft.checkin()}",
                                oninput: move |evt| dialog.with_mut(|s| s.draft.set_checkin(evt.value())),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "booking-checkout", {t!("booking-checkout")} }
                            input {
                                id: "booking-checkout",
                                name: "checkout",
                                r#type: "date",
                                required: true,
                                min: "{draft.checkout_min()}",
                                value: "{draft.checkout}",
                                oninput: move |evt| dialog.with_mut(|s| s.draft.checkout = evt.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "booking-persons", {t!("booking-persons")} }
                        select {
                            id: "booking-persons",
                            name: "persons",
                            required: true,
                            value: "{draft.persons}",
                            oninput: move |evt| dialog.with_mut(|s| s.draft.persons = evt.value()),
                            option { value: "", disabled: true, selected: draft.persons.is_empty(), {t!("booking-total")} }
                            for guests in 1..=10 {
                                option { key: "{guests}", value: "{guests}", "{guests}" }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "booking-phone", {t!("booking-phone")} }
                        input {
                            id: "booking-phone",
                            name: "phone",
                            r#type: "tel",
                            required: true,
                            value: "{draft.phone}",
                            oninput: move |evt| dialog.with_mut(|s| s.draft.phone = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "booking-email", {t!("booking-email")} }
                        input {
                            id: "booking-email",
                            name: "email",
                            r#type: "email",
                            value: "{draft.email}",
                            oninput: move |evt| dialog.with_mut(|s| s.draft.email = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "booking-message", {t!("booking-message")} }
                        textarea {
                            id: "booking-message",
                            name: "message",
                            rows: 3,
                            placeholder: t!("booking-note"),
                            value: "{draft.message}",
                            oninput: move |evt| dialog.with_mut(|s| s.draft.message = evt.value()),
                        }
                    }

                    div { class: "booking-actions",
                        button {
                            r#type: "button",
                            id: "booking-cancel",
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                dialog.with_mut(|state| state.handle(DialogEvent::Cancel));
                            },
                            {t!("booking-cancel")}
                        }
                        button { r#type: "submit", class: "btn btn-primary", {t!("booking-submit")} }
                    }
                }
            }
        }
    }
}

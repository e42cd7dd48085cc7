//! Booking form state and the chat message it produces.

use thiserror::Error;

use crate::core::format::{form_date, format_long_date, parse_form_date};
use crate::i18n::Lang;

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("{field} date {value:?} is not a YYYY-MM-DD value")]
    InvalidDate { field: &'static str, value: String },
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub name: String,
    checkin: String,
    pub checkout: String,
    pub persons: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl BookingDraft {
    pub fn checkin(&self) -> &str {
        &self.checkin
    }

    /// Set check-in; a check-out already earlier than it is cleared.
    pub fn set_checkin(&mut self, value: String) {
        self.checkin = value;
        if !self.checkout.is_empty() && self.checkout < self.checkin {
            self.checkout.clear();
        }
    }

    /// Earliest selectable check-out (tracks check-in).
    pub fn checkout_min(&self) -> &str {
        &self.checkin
    }
}

/// Everything the open dialog reacts to besides typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    CloseButton,
    Cancel,
    /// Click on the dimmed area around the content.
    Backdrop,
    /// Click anywhere inside the content box.
    ContentClick,
    Escape,
    Submitted,
}

impl DialogEvent {
    pub const DISMISSALS: [DialogEvent; 5] = [
        DialogEvent::CloseButton,
        DialogEvent::Cancel,
        DialogEvent::Backdrop,
        DialogEvent::Escape,
        DialogEvent::Submitted,
    ];

    fn dismisses(self) -> bool {
        !matches!(self, DialogEvent::ContentClick)
    }
}

/// Modal visibility plus the draft it owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDialogState {
    open: bool,
    checkin_min: String,
    pub draft: BookingDraft,
}

impl BookingDialogState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn checkin_min(&self) -> &str {
        &self.checkin_min
    }

    pub fn open(&mut self, today: time::Date) {
        self.open = true;
        self.checkin_min = form_date(today);
    }

    /// Page scrolling is locked exactly while the dialog is shown.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Apply `event`; returns whether it closed the dialog. Events arriving
    /// while closed are ignored.
    pub fn handle(&mut self, event: DialogEvent) -> bool {
        if !self.open || !event.dismisses() {
            return false;
        }
        self.close();
        true
    }

    /// Shared teardown for every dismissal.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = BookingDraft::default();
    }
}

struct MessageTemplate {
    greeting: &'static str,
    intro: &'static str,
    name: &'static str,
    checkin: &'static str,
    checkout: &'static str,
    guests: &'static str,
    phone: &'static str,
    email: &'static str,
    note: &'static str,
    closing: &'static str,
}

const TEMPLATE_ID: MessageTemplate = MessageTemplate {
    greeting: "Halo Sierra Villa,",
    intro: "Saya ingin melakukan pemesanan:",
    name: "Nama",
    checkin: "Tanggal Check-in",
    checkout: "Tanggal Check-out",
    guests: "Jumlah Tamu",
    phone: "Nomor Telepon",
    email: "Email",
    note: "Pesan Tambahan",
    closing: "Mohon konfirmasi pemesanan saya. Terima kasih!",
};

const TEMPLATE_EN: MessageTemplate = MessageTemplate {
    greeting: "Hello Sierra Villa,",
    intro: "I would like to make a booking reservation:",
    name: "Name",
    checkin: "Check-in Date",
    checkout: "Check-out Date",
    guests: "Number of Guest(s)",
    phone: "Phone Number",
    email: "Email",
    note: "Additional Message",
    closing: "Please confirm my booking. Thank you!",
};

fn template(lang: Lang) -> &'static MessageTemplate {
    match lang {
        Lang::Id => &TEMPLATE_ID,
        Lang::En => &TEMPLATE_EN,
    }
}

fn long_date(field: &'static str, raw: &str, lang: Lang) -> Result<String, BookingError> {
    parse_form_date(raw)
        .map(|date| format_long_date(date, lang))
        .ok_or_else(|| BookingError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Multi-line booking request in the active language.
pub fn compose_message(draft: &BookingDraft, lang: Lang) -> Result<String, BookingError> {
    let tpl = template(lang);
    let checkin = long_date("check-in", &draft.checkin, lang)?;
    let checkout = long_date("check-out", &draft.checkout, lang)?;

    let mut message = format!(
        "{}\n\n{}\n\n{}: {}\n{}: {checkin}\n{}: {checkout}\n{}: {}\n{}: {}",
        tpl.greeting,
        tpl.intro,
        tpl.name,
        draft.name,
        tpl.checkin,
        tpl.checkout,
        tpl.guests,
        draft.persons,
        tpl.phone,
        draft.phone,
    );
    if !draft.email.is_empty() {
        message.push_str(&format!("\n{}: {}", tpl.email, draft.email));
    }
    if !draft.message.is_empty() {
        message.push_str(&format!("\n\n{}:\n{}", tpl.note, draft.message));
    }
    message.push_str("\n\n");
    message.push_str(tpl.closing);
    Ok(message)
}

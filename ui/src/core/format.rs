//! Formatting helpers for presenting dates in the booking message.

use time::{macros::format_description, Date, Month, Weekday};

use crate::i18n::Lang;

/// Parse a form date value (`YYYY-MM-DD`).
pub fn parse_form_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

/// Form value (`YYYY-MM-DD`) for a date, as used by `min` attributes.
pub fn form_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Long date with weekday, day, month and year:
/// - `id`: `Minggu, 1 Juni 2025`
/// - `en`: `Sunday, June 1, 2025`
pub fn format_long_date(date: Date, lang: Lang) -> String {
    let weekday = weekday_name(date.weekday(), lang);
    let month = month_name(date.month(), lang);
    match lang {
        Lang::Id => format!("{weekday}, {} {month} {}", date.day(), date.year()),
        Lang::En => format!("{weekday}, {month} {}, {}", date.day(), date.year()),
    }
}

fn weekday_name(day: Weekday, lang: Lang) -> &'static str {
    let idx = day.number_days_from_monday() as usize;
    match lang {
        Lang::Id => ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"][idx],
        Lang::En => [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ][idx],
    }
}

fn month_name(month: Month, lang: Lang) -> &'static str {
    let idx = month as usize - 1;
    match lang {
        Lang::Id => [
            "Januari",
            "Februari",
            "Maret",
            "April",
            "Mei",
            "Juni",
            "Juli",
            "Agustus",
            "September",
            "Oktober",
            "November",
            "Desember",
        ][idx],
        Lang::En => [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][idx],
    }
}

//! Assembles the final localized date strings.

use chrono::{Datelike, Local, NaiveDate};

use sanli_calendar::{GregorianDate, ResolvedDate, to_lunar, to_tibetan};
use sanli_festival::{Haircut, fasting, haircut, observance, solar_term};

use crate::locale::Locale;
use crate::names::{day_name, month_name};
use crate::weekday::{weekday_color, weekday_name};

/// Calendar a date can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Gregorian,
    Lunar,
    Tibetan,
}

/// Renders `date` in the requested calendar and locale, annotations
/// included. The single formatting entry point; pure apart from the
/// table lookups behind it.
pub fn format_date(calendar: Calendar, date: NaiveDate, locale: Locale) -> String {
    match calendar {
        Calendar::Gregorian => format_gregorian(date, locale),
        Calendar::Lunar => format_lunar(date, locale),
        Calendar::Tibetan => format_tibetan(date, locale),
    }
}

/// Renders the current local date; what a daily-refresh caller invokes
/// once per tick.
pub fn format_current(calendar: Calendar, locale: Locale) -> String {
    format_date(calendar, Local::now().date_naive(), locale)
}

/// Gregorian rendering: date, weekday marker, weekday name, and the
/// seasonal turning point when the date falls on one.
fn format_gregorian(date: NaiveDate, locale: Locale) -> String {
    let color = weekday_color(date.weekday());
    let name = weekday_name(date.weekday(), locale);
    let notes = solar_term(date.month() as u8, date.day() as u8)
        .map(|term| match locale {
            Locale::Zh => vec![term.zh().to_string()],
            Locale::En => vec![term.en().to_string()],
        })
        .unwrap_or_default();
    let suffix = annotation_suffix(&notes);

    match locale {
        Locale::Zh => format!(
            "{:04}年{:02}月{:02}日 {} {}{}",
            date.year(),
            date.month(),
            date.day(),
            color,
            name,
            suffix
        ),
        Locale::En => format!(
            "{:04}-{:02}-{:02} {} {}{}",
            date.year(),
            date.month(),
            date.day(),
            color,
            name,
            suffix
        ),
    }
}

/// Lunar rendering with traditional month/day names in Chinese, plus
/// solar-term and fasting-day annotations.
fn format_lunar(date: NaiveDate, locale: Locale) -> String {
    let resolved = to_lunar(GregorianDate::from_naive(date));

    let mut notes = Vec::new();
    if let Some(term) = solar_term(date.month() as u8, date.day() as u8) {
        notes.push(match locale {
            Locale::Zh => term.zh().to_string(),
            Locale::En => term.en().to_string(),
        });
    }
    if let Some(fast) = fasting(resolved.day) {
        notes.push(match locale {
            Locale::Zh => fast.zh().to_string(),
            Locale::En => fast.en().to_string(),
        });
    }
    let suffix = annotation_suffix(&notes);

    match locale {
        Locale::Zh => {
            let leap = if resolved.leap_month { "闰" } else { "" };
            format!(
                "{}年{}{}月{}{}",
                resolved.year,
                leap,
                month_name(resolved.month),
                day_name(resolved.day),
                suffix
            )
        }
        Locale::En => format!("{}{}", numeric_date(&resolved), suffix),
    }
}

/// Tibetan rendering with observance-day and hair-cutting annotations.
fn format_tibetan(date: NaiveDate, locale: Locale) -> String {
    let resolved = to_tibetan(GregorianDate::from_naive(date));

    let mut notes = Vec::new();
    if let Some(entry) = observance(resolved.day) {
        notes.push(match locale {
            Locale::Zh => entry.zh.to_string(),
            Locale::En => entry.en.to_string(),
        });
    }
    if let Some(entry) = haircut(resolved.day) {
        notes.push(haircut_label(entry, locale));
    }
    let suffix = annotation_suffix(&notes);

    match locale {
        Locale::Zh => {
            let leap = if resolved.leap_month { "闰" } else { "" };
            format!(
                "{}年{}{}月{}日{}",
                resolved.year, leap, resolved.month, resolved.day, suffix
            )
        }
        Locale::En => format!("{}{}", numeric_date(&resolved), suffix),
    }
}

fn haircut_label(entry: &Haircut, locale: Locale) -> String {
    match locale {
        Locale::Zh if entry.auspicious => format!("理发吉: {}", entry.zh),
        Locale::Zh => format!("理发凶🔴: {}", entry.zh),
        Locale::En => format!("Hair Cut: {}", entry.en),
    }
}

/// `Y/M/D` with a `Leap` token before a leap month.
fn numeric_date(resolved: &ResolvedDate) -> String {
    if resolved.leap_month {
        format!("{}/Leap{}/{}", resolved.year, resolved.month, resolved.day)
    } else {
        format!("{}/{}/{}", resolved.year, resolved.month, resolved.day)
    }
}

/// ` (a, b)` when any annotation applies, empty otherwise.
fn annotation_suffix(notes: &[String]) -> String {
    if notes.is_empty() {
        String::new()
    } else {
        format!(" ({})", notes.join(", "))
    }
}

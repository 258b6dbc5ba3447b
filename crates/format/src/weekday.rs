//! Weekday marker symbols and localized weekday names.

use chrono::Weekday;

use crate::locale::Locale;

/// Colored marker for a weekday, one unique symbol per day following a
/// psychological color association (Monday green through Sunday
/// purple). Invalid weekdays cannot be represented, so there is no
/// fallback arm.
pub fn weekday_color(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "🟢",
        Weekday::Tue => "🔵",
        Weekday::Wed => "🟡",
        Weekday::Thu => "🟠",
        Weekday::Fri => "🔴",
        Weekday::Sat => "⚪",
        Weekday::Sun => "🟣",
    }
}

const WEEKDAYS_ZH: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Localized short weekday name.
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let index = weekday.num_days_from_monday() as usize;
    match locale {
        Locale::Zh => WEEKDAYS_ZH[index],
        Locale::En => WEEKDAYS_EN[index],
    }
}

//! Static per-year calendar data for 2020..=2030.
//!
//! Each entry records where a calendar's new year falls inside the
//! Gregorian year and how long each of its months is. The Tibetan table
//! follows the Phugpa tradition; the lunar table follows the Chinese
//! lunisolar calendar.

/// One year of lunisolar calendar data, keyed by Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry {
    /// Gregorian year this entry describes.
    pub year: i32,
    /// Gregorian day-of-year of this calendar's new year (1..=366).
    pub new_year_doy: u16,
    /// Days per calendar month (29 or 30), in chronological order,
    /// with an extra entry when the year carries a leap month.
    pub month_lengths: &'static [u8],
    /// Month number that is doubled; 0 when the year has no leap month.
    /// In a 13-entry `month_lengths` the entry at 0-based index
    /// `leap_month` is the leap month itself.
    pub leap_month: u8,
}

/// Chinese lunar years. New-year offsets and leap months follow the
/// published calendar; month lengths alternate 30/29 with the tail
/// adjusted so that each year spans exactly the distance to the next
/// new year.
#[rustfmt::skip]
pub(crate) const LUNAR_YEARS: [YearEntry; 11] = [
    YearEntry { year: 2020, new_year_doy: 25, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], leap_month: 4 }, // Jan 25, leap month 4
    YearEntry { year: 2021, new_year_doy: 43, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 12
    YearEntry { year: 2022, new_year_doy: 32, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30],     leap_month: 0 }, // Feb 1
    YearEntry { year: 2023, new_year_doy: 22, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], leap_month: 2 }, // Jan 22, leap month 2
    YearEntry { year: 2024, new_year_doy: 41, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 10
    YearEntry { year: 2025, new_year_doy: 29, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], leap_month: 6 }, // Jan 29, leap month 6
    YearEntry { year: 2026, new_year_doy: 48, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 17
    YearEntry { year: 2027, new_year_doy: 37, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 6
    YearEntry { year: 2028, new_year_doy: 26, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], leap_month: 5 }, // Jan 26, leap month 5
    YearEntry { year: 2029, new_year_doy: 44, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30],     leap_month: 0 }, // Feb 13
    YearEntry { year: 2030, new_year_doy: 34, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 3
];

/// Tibetan years per the Phugpa tradition, computed after Svante
/// Janson's formulation. Some entries undershoot the distance to the
/// next new year; the converter pins the overhang to month 12, day 30.
#[rustfmt::skip]
pub(crate) const TIBETAN_YEARS: [YearEntry; 11] = [
    YearEntry { year: 2020, new_year_doy: 55, month_lengths: &[30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30],     leap_month: 0 }, // Feb 24
    YearEntry { year: 2021, new_year_doy: 43, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30],     leap_month: 0 }, // Feb 12
    YearEntry { year: 2022, new_year_doy: 32, month_lengths: &[29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29],     leap_month: 0 }, // Feb 1
    YearEntry { year: 2023, new_year_doy: 52, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30],     leap_month: 0 }, // Feb 21
    YearEntry { year: 2024, new_year_doy: 40, month_lengths: &[29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30],     leap_month: 0 }, // Feb 9
    YearEntry { year: 2025, new_year_doy: 59, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], leap_month: 6 }, // Feb 28, leap month 6
    YearEntry { year: 2026, new_year_doy: 47, month_lengths: &[29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29],     leap_month: 0 }, // Feb 16
    YearEntry { year: 2027, new_year_doy: 36, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30],     leap_month: 0 }, // Feb 5
    YearEntry { year: 2028, new_year_doy: 56, month_lengths: &[29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30],     leap_month: 5 }, // Feb 25, leap month 5
    YearEntry { year: 2029, new_year_doy: 43, month_lengths: &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],     leap_month: 0 }, // Feb 12
    YearEntry { year: 2030, new_year_doy: 33, month_lengths: &[30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30],     leap_month: 0 }, // Feb 2
];

/// Looks up the entry for a Gregorian year, `None` outside 2020..=2030.
pub(crate) fn lookup(table: &'static [YearEntry], year: i32) -> Option<&'static YearEntry> {
    table.iter().find(|entry| entry.year == year)
}

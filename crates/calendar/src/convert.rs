//! Table-driven conversion from Gregorian dates into lunisolar calendars.

use crate::gregorian::{GregorianDate, days_in_year};
use crate::tables::{LUNAR_YEARS, TIBETAN_YEARS, YearEntry, lookup};

/// A date resolved in a lunisolar calendar.
///
/// Derived on every call; carries no identity beyond its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedDate {
    /// Calendar year the date falls in.
    pub year: i32,
    /// Calendar month (1..=12). A leap month repeats the number of the
    /// month it duplicates.
    pub month: u8,
    /// Day within the calendar month (1..=30).
    pub day: u8,
    /// True when the date falls in a leap month.
    pub leap_month: bool,
}

/// Constants of the periodic new-year estimate used outside the table
/// range. Empirical legacy values, not derived from ephemeris data.
#[derive(Debug, Clone, Copy)]
struct ApproxParams {
    /// First year of the 60-year cycle.
    cycle_anchor: i32,
    /// Earliest day-of-year the estimated new year can fall on.
    base_doy: i32,
    /// Estimates above this day-of-year wrap back by 30 days.
    wrap_doy: i32,
}

/// Lunisolar calendar system to convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Chinese lunar calendar.
    Lunar,
    /// Tibetan calendar (Phugpa tradition).
    Tibetan,
}

impl System {
    fn table(self) -> &'static [YearEntry] {
        match self {
            System::Lunar => &LUNAR_YEARS,
            System::Tibetan => &TIBETAN_YEARS,
        }
    }

    fn approx_params(self) -> ApproxParams {
        match self {
            System::Lunar => ApproxParams {
                cycle_anchor: 1984,
                base_doy: 21,
                wrap_doy: 51,
            },
            System::Tibetan => ApproxParams {
                cycle_anchor: 1027,
                base_doy: 32,
                wrap_doy: 60,
            },
        }
    }

    /// Resolves a Gregorian date in this calendar system.
    ///
    /// Total over valid Gregorian dates: years without table data fall
    /// back to a coarse periodic estimate instead of failing, so the
    /// result is always within month 1..=12 and day 1..=30.
    pub fn resolve(self, date: GregorianDate) -> ResolvedDate {
        let doy = date.day_of_year();
        let Some(entry) = lookup(self.table(), date.year()) else {
            return self.approximate(date);
        };

        if doy >= entry.new_year_doy {
            let offset = doy - entry.new_year_doy;
            return walk_months(date.year(), offset, entry);
        }

        // Before this year's new year: the date belongs to the previous
        // calendar year, counted from that year's new year.
        let Some(prev) = lookup(self.table(), date.year() - 1) else {
            return self.approximate(date);
        };
        let offset = (days_in_year(date.year() - 1) - prev.new_year_doy) + doy;
        walk_months(date.year() - 1, offset, prev)
    }

    /// Periodic estimate for years outside the table: new year from a
    /// 60-year cycle with an 11-day stride mod 30, then flat 30-day
    /// months.
    fn approximate(self, date: GregorianDate) -> ResolvedDate {
        let params = self.approx_params();
        let doy = date.day_of_year() as i32;

        let new_year = estimated_new_year(params, date.year());
        if doy >= new_year {
            return flat_months(date.year(), doy - new_year);
        }

        let prev_new_year = estimated_new_year(params, date.year() - 1);
        let offset = (days_in_year(date.year() - 1) as i32 - prev_new_year) + doy;
        flat_months(date.year() - 1, offset)
    }
}

/// Converts a Gregorian date to the Chinese lunar calendar.
pub fn to_lunar(date: GregorianDate) -> ResolvedDate {
    System::Lunar.resolve(date)
}

/// Converts a Gregorian date to the Tibetan calendar.
pub fn to_tibetan(date: GregorianDate) -> ResolvedDate {
    System::Tibetan.resolve(date)
}

/// Walks the month lengths until `offset` (days since the new year)
/// falls inside a month, renumbering around the leap month: the entry
/// at walk index `leap_month` repeats that month number with the leap
/// flag set, and later entries shift back by one so numbers stay within
/// 1..=12.
fn walk_months(year: i32, mut offset: u16, entry: &YearEntry) -> ResolvedDate {
    for (i, &len) in entry.month_lengths.iter().enumerate() {
        let len = len as u16;
        if offset < len {
            let walked = i as u8;
            let (month, leap_month) = if entry.leap_month > 0 && walked >= entry.leap_month {
                (walked.max(entry.leap_month), walked == entry.leap_month)
            } else {
                (walked + 1, false)
            };
            return ResolvedDate {
                year,
                month,
                day: offset as u8 + 1,
                leap_month,
            };
        }
        offset -= len;
    }

    // The table undershoots the gap to the next new year; pin to the
    // last representable day rather than spilling over.
    ResolvedDate {
        year,
        month: 12,
        day: 30,
        leap_month: false,
    }
}

fn estimated_new_year(params: ApproxParams, year: i32) -> i32 {
    let cycle = (year - params.cycle_anchor) % 60;
    let mut doy = params.base_doy + (cycle * 11) % 30;
    if doy > params.wrap_doy {
        doy -= 30;
    }
    doy
}

fn flat_months(year: i32, offset: i32) -> ResolvedDate {
    let month = offset / 30 + 1;
    let day = offset % 30 + 1;
    if month > 12 {
        return ResolvedDate {
            year,
            month: 12,
            day: 30,
            leap_month: false,
        };
    }
    ResolvedDate {
        year,
        month: month as u8,
        day: day as u8,
        leap_month: false,
    }
}

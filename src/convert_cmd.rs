//! Convert command: render an arbitrary Gregorian date.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use sanli_calendar::{GregorianDate, System};
use sanli_format::{Calendar, format_date};

use crate::cli::ConvertArgs;
use crate::config::SanliConfig;
use crate::select::{select_calendar, select_locale};

/// Converts one Gregorian date and prints the localized rendering.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let config = SanliConfig::load(&args.config)?;
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("invalid date: {:?} (expected YYYY-MM-DD)", args.date))?;
    let calendar = select_calendar(args.calendar, &config)?;
    let locale = select_locale(args.locale, &config)?;
    info!(?calendar, ?locale, %date, "converting");

    if let Some(system) = conversion_system(calendar) {
        let resolved = system.resolve(GregorianDate::from_naive(date));
        info!(
            year = resolved.year,
            month = resolved.month,
            day = resolved.day,
            leap_month = resolved.leap_month,
            "resolved"
        );
    }

    println!("{}", format_date(calendar, date, locale));
    Ok(())
}

fn conversion_system(calendar: Calendar) -> Option<System> {
    match calendar {
        Calendar::Gregorian => None,
        Calendar::Lunar => Some(System::Lunar),
        Calendar::Tibetan => Some(System::Tibetan),
    }
}

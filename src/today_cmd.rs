//! Today command: render the current local date.

use anyhow::Result;
use tracing::{info, info_span};

use sanli_format::format_current;

use crate::cli::TodayArgs;
use crate::config::SanliConfig;
use crate::select::{select_calendar, select_locale};

/// Prints today's date in the selected calendar and locale.
pub fn run(args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();

    let config = SanliConfig::load(&args.config)?;
    let calendar = select_calendar(args.calendar, &config)?;
    let locale = select_locale(args.locale, &config)?;
    info!(?calendar, ?locale, "rendering current date");

    println!("{}", format_current(calendar, locale));
    Ok(())
}

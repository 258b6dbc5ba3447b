//! # sanli-format
//!
//! Locale detection and localized rendering of converted calendar
//! dates: weekday markers, traditional Chinese month/day names, and
//! the festival annotations supplied by `sanli-festival`.
//!
//! Locale and date are threaded in as explicit parameters; nothing is
//! cached between calls, so rendering is a pure function of its
//! inputs (plus `format_current`, which reads the local clock once).
//!
//! ## Quick Start
//!
//! ```ignore
//! use sanli_format::{Calendar, Locale, format_date};
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
//! let text = format_date(Calendar::Lunar, date, Locale::Zh);
//! assert_eq!(text, "2025年闰六月初一 (十斋日)");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `locale` | Environment language-signal detection |
//! | `weekday` | Marker symbols and localized weekday names |
//! | `names` | Traditional Chinese lunar month/day names |
//! | `compose` | Final string assembly per calendar and locale |

mod compose;
mod locale;
mod names;
mod weekday;

pub use compose::{Calendar, format_current, format_date};
pub use locale::{Locale, detect_from_signals};
pub use weekday::{weekday_color, weekday_name};

//! # sanli-calendar
//!
//! Gregorian day arithmetic and table-driven conversion into the
//! Chinese lunar and Tibetan calendars.
//!
//! Years 2020..=2030 are covered by static per-year tables recording
//! the new-year offset, month lengths and leap-month position of each
//! system; outside that range a coarse periodic estimate keeps the
//! conversion total. All tables are `'static` and read-only, so every
//! operation is pure and safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sanli_calendar::{GregorianDate, to_lunar, to_tibetan};
//!
//! let date = GregorianDate::new(2025, 7, 25)?;
//! let lunar = to_lunar(date);
//! assert_eq!((lunar.month, lunar.leap_month), (6, true)); // leap sixth month
//!
//! let tibetan = to_tibetan(date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years, day-of-year, validated Gregorian dates |
//! | `tables` | Static per-year new-year offsets and month lengths |
//! | `convert` | Conversion algorithm and approximation fallback |
//! | `error` | Error types |

mod convert;
mod error;
mod gregorian;
mod tables;

pub use convert::{ResolvedDate, System, to_lunar, to_tibetan};
pub use error::CalendarError;
pub use gregorian::{GregorianDate, days_in_year, is_leap_year};
pub use tables::YearEntry;

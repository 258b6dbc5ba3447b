//! # sanli-festival
//!
//! Day-of-month keyed cultural annotations layered on top of resolved
//! calendar dates: Buddhist observance days and hair-cutting fortune
//! for the Tibetan calendar, fasting-day membership for the lunar
//! calendar, and a simplified solar-term lookup for Gregorian dates.
//!
//! Every lookup is a pure function over an immutable `'static` table,
//! independent of year and month.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `tibetan` | Observance days and hair-cutting fortune (days 1..=30) |
//! | `lunar` | Six/ten fasting-day classification |
//! | `solar_term` | The four seasonal turning points |

mod lunar;
mod solar_term;
mod tibetan;

pub use lunar::{Fasting, fasting};
pub use solar_term::{SolarTerm, solar_term};
pub use tibetan::{Haircut, Observance, haircut, observance};

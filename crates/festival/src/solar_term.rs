//! Simplified solar-term lookup: the four seasonal turning points only.
//!
//! This is deliberately not a general 24-term solar calendar. Each
//! turning point is matched by the narrow Gregorian window it can fall
//! in; every other date yields `None`.

/// One of the four seasonal turning points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarTerm {
    SpringEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

impl SolarTerm {
    /// Chinese name.
    pub fn zh(self) -> &'static str {
        match self {
            SolarTerm::SpringEquinox => "春分",
            SolarTerm::SummerSolstice => "夏至",
            SolarTerm::AutumnEquinox => "秋分",
            SolarTerm::WinterSolstice => "冬至",
        }
    }

    /// English name.
    pub fn en(self) -> &'static str {
        match self {
            SolarTerm::SpringEquinox => "Spring Equinox",
            SolarTerm::SummerSolstice => "Summer Solstice",
            SolarTerm::AutumnEquinox => "Autumn Equinox",
            SolarTerm::WinterSolstice => "Winter Solstice",
        }
    }
}

/// Returns the seasonal turning point for a Gregorian (month, day),
/// if the day falls inside the window the term can occur in.
pub fn solar_term(month: u8, day: u8) -> Option<SolarTerm> {
    match (month, day) {
        (3, 20..=21) => Some(SolarTerm::SpringEquinox),
        (6, 20..=22) => Some(SolarTerm::SummerSolstice),
        (9, 22..=23) => Some(SolarTerm::AutumnEquinox),
        (12, 21..=22) => Some(SolarTerm::WinterSolstice),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_points_match() {
        assert_eq!(solar_term(3, 20), Some(SolarTerm::SpringEquinox));
        assert_eq!(solar_term(6, 21), Some(SolarTerm::SummerSolstice));
        assert_eq!(solar_term(9, 23), Some(SolarTerm::AutumnEquinox));
        assert_eq!(solar_term(12, 22), Some(SolarTerm::WinterSolstice));
    }

    #[test]
    fn window_edges_are_exclusive() {
        assert_eq!(solar_term(3, 19), None);
        assert_eq!(solar_term(3, 22), None);
        assert_eq!(solar_term(6, 23), None);
        assert_eq!(solar_term(12, 20), None);
    }

    #[test]
    fn other_months_empty() {
        for month in [1, 2, 4, 5, 7, 8, 10, 11] {
            for day in 1..=31 {
                assert_eq!(solar_term(month, day), None, "{month}-{day}");
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::WinterSolstice.zh(), "冬至");
        assert_eq!(SolarTerm::SpringEquinox.en(), "Spring Equinox");
    }
}

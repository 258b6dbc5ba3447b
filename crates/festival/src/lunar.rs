//! Fasting-day classification for lunar days-of-month.

/// Fasting-day sets a lunar day can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fasting {
    /// Member of the ten fasting days only.
    Ten,
    /// Member of both the six and the ten fasting days.
    SixAndTen,
}

/// Days belonging to both the six and the ten fasting days.
const SIX_AND_TEN_DAYS: [u8; 6] = [8, 14, 15, 23, 29, 30];

/// Remaining members of the ten fasting days.
const TEN_ONLY_DAYS: [u8; 4] = [1, 18, 24, 28];

impl Fasting {
    /// Chinese label.
    pub fn zh(self) -> &'static str {
        match self {
            Fasting::Ten => "十斋日",
            Fasting::SixAndTen => "六斋日/十斋日",
        }
    }

    /// English label.
    pub fn en(self) -> &'static str {
        match self {
            Fasting::Ten => "Ten Fasting Days",
            Fasting::SixAndTen => "Six/Ten Fasting Days",
        }
    }
}

/// Classifies a lunar day-of-month (1..=30); `None` for non-fasting days.
pub fn fasting(day: u8) -> Option<Fasting> {
    if SIX_AND_TEN_DAYS.contains(&day) {
        Some(Fasting::SixAndTen)
    } else if TEN_ONLY_DAYS.contains(&day) {
        Some(Fasting::Ten)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_15_is_in_both_sets() {
        assert_eq!(fasting(15), Some(Fasting::SixAndTen));
    }

    #[test]
    fn ten_fasting_days_complete() {
        let ten: Vec<u8> = (1..=30).filter(|&d| fasting(d).is_some()).collect();
        assert_eq!(ten, vec![1, 8, 14, 15, 18, 23, 24, 28, 29, 30]);
    }

    #[test]
    fn six_fasting_days_complete() {
        let six: Vec<u8> = (1..=30)
            .filter(|&d| fasting(d) == Some(Fasting::SixAndTen))
            .collect();
        assert_eq!(six, vec![8, 14, 15, 23, 29, 30]);
    }

    #[test]
    fn ordinary_days_unclassified() {
        for day in [2, 3, 7, 13, 16, 22, 27] {
            assert_eq!(fasting(day), None, "day {day}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Fasting::Ten.zh(), "十斋日");
        assert_eq!(Fasting::SixAndTen.en(), "Six/Ten Fasting Days");
    }
}

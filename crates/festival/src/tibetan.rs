//! Tibetan day-of-month annotations: Buddhist observance days and
//! hair-cutting fortune.

/// A Buddhist observance day tied to a fixed Tibetan day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observance {
    /// Tibetan day-of-month the observance falls on.
    pub day: u8,
    /// Chinese label.
    pub zh: &'static str,
    /// English label.
    pub en: &'static str,
}

const OBSERVANCES: [Observance; 5] = [
    Observance {
        day: 8,
        zh: "药师佛节日/殊胜日",
        en: "Medicine Buddha Day/Auspicious Day",
    },
    Observance {
        day: 10,
        zh: "莲师节日",
        en: "Guru Rinpoche Day",
    },
    Observance {
        day: 15,
        zh: "阿弥陀佛节日/殊胜日",
        en: "Amitabha Buddha Day/Auspicious Day",
    },
    Observance {
        day: 25,
        zh: "空行母节日",
        en: "Dakini Day",
    },
    Observance {
        day: 30,
        zh: "殊胜日",
        en: "Auspicious Day",
    },
];

/// Returns the observance for a Tibetan day-of-month, if one falls on it.
pub fn observance(day: u8) -> Option<&'static Observance> {
    OBSERVANCES.iter().find(|entry| entry.day == day)
}

/// Hair-cutting fortune for one Tibetan day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Haircut {
    /// Whether cutting hair on this day is auspicious.
    pub auspicious: bool,
    /// Chinese reason text.
    pub zh: &'static str,
    /// English reason text.
    pub en: &'static str,
}

/// Fortune per day 1..=30, from the traditional correspondence chart.
/// The English column carries the chart's received wording as-is.
#[rustfmt::skip]
const HAIRCUT: [Haircut; 30] = [
    Haircut { auspicious: false, zh: "短命减寿",       en: "Auspicious" },
    Haircut { auspicious: false, zh: "遇传染病",       en: "Risk of Contagious Disease" },
    Haircut { auspicious: true,  zh: "财富增上",       en: "Sweet" },
    Haircut { auspicious: false, zh: "低贱, 豆腐店主", en: "Lowly, Tofu Shop Owner" },
    Haircut { auspicious: false, zh: "易患疾病",       en: "Prone to Illness, Inauspicious" },
    Haircut { auspicious: true,  zh: "面色红润",       en: "Rosy Complexion" },
    Haircut { auspicious: false, zh: "易争吵",         en: "Prone to Arguments" },
    Haircut { auspicious: true,  zh: "得长寿",         en: "Longevity" },
    Haircut { auspicious: true,  zh: "姻缘",           en: "Meet Monks, Sharing" },
    Haircut { auspicious: false, zh: "遇传染病",       en: "Contagious Disease" },
    Haircut { auspicious: true,  zh: "增长智慧",       en: "Increase Wisdom" },
    Haircut { auspicious: false, zh: "招致疾病",       en: "Attract Disease, Inauspicious" },
    Haircut { auspicious: true,  zh: "佛慧增长",       en: "Skill Improvement" },
    Haircut { auspicious: true,  zh: "增长财富",       en: "Growth of Things" },
    Haircut { auspicious: true,  zh: "增长福报",       en: "Increase Merit" },
    Haircut { auspicious: false, zh: "患病",           en: "Illness" },
    Haircut { auspicious: false, zh: "易失明, 眼疾",   en: "Risk of Blindness, Eye Disease" },
    Haircut { auspicious: false, zh: "丢失财物",       en: "Loss of Property" },
    Haircut { auspicious: true,  zh: "增长寿命",       en: "Increase Lifespan" },
    Haircut { auspicious: false, zh: "易挨饿",         en: "Prone to Hunger" },
    Haircut { auspicious: false, zh: "易患眼疾, 失明", en: "Eye Disease, Blindness" },
    Haircut { auspicious: true,  zh: "增长财物",       en: "Increase Wealth" },
    Haircut { auspicious: false, zh: "患麻风病等",     en: "Leprosy etc." },
    Haircut { auspicious: false, zh: "遇口舌, 凶",     en: "Disputes, Inauspicious" },
    Haircut { auspicious: false, zh: "得白内障",       en: "Get Cataract" },
    Haircut { auspicious: true,  zh: "得快乐",         en: "Get Happiness" },
    Haircut { auspicious: false, zh: "吐血, 凶",       en: "Vomit Blood, Inauspicious" },
    Haircut { auspicious: false, zh: "易患疯癫",       en: "Prone to Madness" },
    Haircut { auspicious: false, zh: "易患白癜风",     en: "Prone to Vitiligo" },
    Haircut { auspicious: false, zh: "死于争斗中",     en: "Die in Conflict" },
];

/// Returns the hair-cutting fortune for a Tibetan day-of-month
/// (1..=30); `None` outside that range.
pub fn haircut(day: u8) -> Option<&'static Haircut> {
    if (1..=30).contains(&day) {
        Some(&HAIRCUT[day as usize - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_8_is_medicine_buddha() {
        let entry = observance(8).unwrap();
        assert!(entry.en.contains("Medicine Buddha"));
        assert_eq!(entry.zh, "药师佛节日/殊胜日");
    }

    #[test]
    fn observance_days_are_fixed_set() {
        let days: Vec<u8> = (1..=30).filter(|&d| observance(d).is_some()).collect();
        assert_eq!(days, vec![8, 10, 15, 25, 30]);
    }

    #[test]
    fn haircut_covers_every_day() {
        for day in 1..=30 {
            let entry = haircut(day).unwrap();
            assert!(!entry.zh.is_empty(), "day {day}");
            assert!(!entry.en.is_empty(), "day {day}");
        }
        assert!(haircut(0).is_none());
        assert!(haircut(31).is_none());
    }

    #[test]
    fn auspicious_days_match_chart() {
        let good: Vec<u8> = (1..=30)
            .filter(|&d| haircut(d).is_some_and(|h| h.auspicious))
            .collect();
        assert_eq!(good, vec![3, 6, 8, 9, 11, 13, 14, 15, 19, 22, 26]);
    }

    #[test]
    fn day_30_warns_of_conflict() {
        let entry = haircut(30).unwrap();
        assert!(!entry.auspicious);
        assert_eq!(entry.en, "Die in Conflict");
    }
}

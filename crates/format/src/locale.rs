//! Locale detection from environment language signals.

use std::env;

/// Output language for formatted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// Chinese.
    Zh,
    /// English.
    En,
}

/// Environment variables inspected for a language signal, in priority
/// order. The last two cover Windows setups without POSIX locale vars.
const SIGNAL_VARS: [&str; 6] = [
    "LANG",
    "LC_ALL",
    "LC_MESSAGES",
    "LANGUAGE",
    "WINLANG",
    "MUI_LANGUAGE",
];

impl Locale {
    /// Classifies a single language signal such as `zh_CN.UTF-8` or
    /// `Chinese (Simplified)`. Anything without a Chinese indicator is
    /// English.
    pub fn from_signal(signal: &str) -> Self {
        if signal.starts_with("zh")
            || signal.contains("Chinese")
            || signal.contains("chinese")
            || signal.contains("CN")
            || signal.contains("cn")
        {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Detects the locale from the process environment.
    ///
    /// Deterministic for a given environment; no state is kept between
    /// calls.
    pub fn detect() -> Self {
        detect_from_signals(SIGNAL_VARS.iter().map(|var| env::var(var).ok()))
    }
}

/// Resolves a locale from an ordered list of optional signals. The
/// first non-empty signal decides; with no signal at all the result is
/// Chinese. That default intentionally biases undetectable
/// environments (typically stripped-down Chinese Windows installs)
/// toward Chinese rather than being a neutral fallback.
pub fn detect_from_signals<I>(signals: I) -> Locale
where
    I: IntoIterator<Item = Option<String>>,
{
    for signal in signals.into_iter().flatten() {
        if !signal.is_empty() {
            return Locale::from_signal(&signal);
        }
    }
    Locale::Zh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn zh_prefix_detected() {
        assert_eq!(Locale::from_signal("zh_CN.UTF-8"), Locale::Zh);
        assert_eq!(Locale::from_signal("zh_TW"), Locale::Zh);
    }

    #[test]
    fn chinese_substrings_detected() {
        assert_eq!(Locale::from_signal("Chinese (Simplified)"), Locale::Zh);
        assert_eq!(Locale::from_signal("chinese"), Locale::Zh);
        assert_eq!(Locale::from_signal("en_CN"), Locale::Zh);
    }

    #[test]
    fn non_chinese_is_english() {
        assert_eq!(Locale::from_signal("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_signal("de_DE"), Locale::En);
        assert_eq!(Locale::from_signal("C.UTF-8"), Locale::En);
    }

    #[test]
    fn first_non_empty_signal_wins() {
        assert_eq!(
            detect_from_signals(signals(&["", "en_US", "zh_CN"])),
            Locale::En
        );
        assert_eq!(
            detect_from_signals(signals(&["zh_CN", "en_US"])),
            Locale::Zh
        );
    }

    #[test]
    fn missing_signals_skipped() {
        assert_eq!(
            detect_from_signals(vec![None, None, Some("zh_CN".to_string())]),
            Locale::Zh
        );
    }

    #[test]
    fn all_empty_defaults_to_chinese() {
        assert_eq!(detect_from_signals(signals(&["", "", ""])), Locale::Zh);
        assert_eq!(detect_from_signals(Vec::new()), Locale::Zh);
    }
}

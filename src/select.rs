//! Merges CLI flags and TOML config into the format crate's API types.

use anyhow::{Result, bail};

use sanli_format::{Calendar, Locale};

use crate::cli::{CalendarArg, LocaleArg};
use crate::config::SanliConfig;

impl From<CalendarArg> for Calendar {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Gregorian => Calendar::Gregorian,
            CalendarArg::Lunar => Calendar::Lunar,
            CalendarArg::Tibetan => Calendar::Tibetan,
        }
    }
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Zh => Locale::Zh,
            LocaleArg::En => Locale::En,
        }
    }
}

/// Parses a calendar name string from the config file.
pub fn parse_calendar(s: &str) -> Result<Calendar> {
    match s.to_lowercase().as_str() {
        "gregorian" => Ok(Calendar::Gregorian),
        "lunar" => Ok(Calendar::Lunar),
        "tibetan" => Ok(Calendar::Tibetan),
        other => bail!("unknown calendar: {other:?}"),
    }
}

/// Parses a locale name string from the config file.
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().as_str() {
        "zh" => Ok(Locale::Zh),
        "en" => Ok(Locale::En),
        other => bail!("unknown locale: {other:?}"),
    }
}

/// Calendar precedence: CLI flag, then config, then Gregorian.
pub fn select_calendar(flag: Option<CalendarArg>, config: &SanliConfig) -> Result<Calendar> {
    if let Some(arg) = flag {
        return Ok(arg.into());
    }
    match &config.calendar {
        Some(name) => parse_calendar(name),
        None => Ok(Calendar::Gregorian),
    }
}

/// Locale precedence: CLI flag, then config, then environment detection.
pub fn select_locale(flag: Option<LocaleArg>, config: &SanliConfig) -> Result<Locale> {
    if let Some(arg) = flag {
        return Ok(arg.into());
    }
    match &config.locale {
        Some(name) => parse_locale(name),
        None => Ok(Locale::detect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_names_parse_case_insensitively() {
        assert_eq!(parse_calendar("Lunar").unwrap(), Calendar::Lunar);
        assert_eq!(parse_calendar("TIBETAN").unwrap(), Calendar::Tibetan);
        assert!(parse_calendar("julian").is_err());
    }

    #[test]
    fn locale_names_parse() {
        assert_eq!(parse_locale("zh").unwrap(), Locale::Zh);
        assert_eq!(parse_locale("EN").unwrap(), Locale::En);
        assert!(parse_locale("fr").is_err());
    }

    #[test]
    fn cli_flag_beats_config() {
        let config = SanliConfig {
            calendar: Some("lunar".to_string()),
            locale: Some("en".to_string()),
        };
        let calendar = select_calendar(Some(CalendarArg::Tibetan), &config).unwrap();
        assert_eq!(calendar, Calendar::Tibetan);
        let locale = select_locale(Some(LocaleArg::Zh), &config).unwrap();
        assert_eq!(locale, Locale::Zh);
    }

    #[test]
    fn config_beats_default() {
        let config = SanliConfig {
            calendar: Some("tibetan".to_string()),
            locale: Some("en".to_string()),
        };
        assert_eq!(
            select_calendar(None, &config).unwrap(),
            Calendar::Tibetan
        );
        assert_eq!(select_locale(None, &config).unwrap(), Locale::En);
    }

    #[test]
    fn empty_config_falls_back_to_gregorian() {
        let config = SanliConfig::default();
        assert_eq!(
            select_calendar(None, &config).unwrap(),
            Calendar::Gregorian
        );
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level sanli configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SanliConfig {
    /// Default calendar: "gregorian", "lunar" or "tibetan".
    #[serde(default)]
    pub calendar: Option<String>,

    /// Output language override: "zh" or "en". Absent means detect
    /// from the environment.
    #[serde(default)]
    pub locale: Option<String>,
}

impl SanliConfig {
    /// Loads the configuration from `path`. A missing file yields the
    /// defaults, so running without a `sanli.toml` just works.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: SanliConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar, None);
        assert_eq!(config.locale, None);
    }

    #[test]
    fn fields_parse() {
        let config: SanliConfig = toml::from_str(
            r#"
            calendar = "tibetan"
            locale = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.as_deref(), Some("tibetan"));
        assert_eq!(config.locale.as_deref(), Some("en"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<SanliConfig, _> = toml::from_str("timezone = \"UTC\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = SanliConfig::load(Path::new("/nonexistent/sanli.toml")).unwrap();
        assert_eq!(config.calendar, None);
    }
}

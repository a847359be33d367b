use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub homepage_url: String,
    pub dashboard_url: String,
    pub locale_dir: PathBuf,
    pub default_language: String,
    pub logged_in_cookie: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Builds the config from any variable source, so tests don't touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            let value = lookup(key).with_context(|| format!("{key} must be set"))?;
            if value.trim().is_empty() {
                bail!("{key} must be set");
            }
            Ok(value)
        };
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        Ok(Self {
            homepage_url: required("HOMEPAGE_URL")?,
            dashboard_url: required("DASHBOARD_URL")?,
            locale_dir: optional("LOCALE_DIR", "locale").into(),
            default_language: optional("DEFAULT_LANGUAGE", "en").to_lowercase(),
            logged_in_cookie: optional("LOGGED_IN_COOKIE", "edxloggedin"),
            bind_addr: optional("BIND_ADDR", "0.0.0.0:3000"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let config = config_from(&[
            ("HOMEPAGE_URL", "https://example.com"),
            ("DASHBOARD_URL", "https://example.com/dashboard"),
        ])
        .unwrap();

        assert_eq!(config.homepage_url, "https://example.com");
        assert_eq!(config.dashboard_url, "https://example.com/dashboard");
        assert_eq!(config.locale_dir, PathBuf::from("locale"));
        assert_eq!(config.default_language, "en");
        assert_eq!(config.logged_in_cookie, "edxloggedin");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn missing_url_is_reported_by_name() {
        let err = config_from(&[("HOMEPAGE_URL", "https://example.com")]).unwrap_err();
        assert_eq!(err.to_string(), "DASHBOARD_URL must be set");
    }

    #[test]
    fn blank_url_is_rejected() {
        let err = config_from(&[
            ("HOMEPAGE_URL", "  "),
            ("DASHBOARD_URL", "https://example.com/dashboard"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "HOMEPAGE_URL must be set");
    }

    #[test]
    fn default_language_is_lowercased() {
        let config = config_from(&[
            ("HOMEPAGE_URL", "https://example.com"),
            ("DASHBOARD_URL", "https://example.com/dashboard"),
            ("DEFAULT_LANGUAGE", "ES"),
        ])
        .unwrap();
        assert_eq!(config.default_language, "es");
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Effective settings after merging flags over the TOML file over defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub session_file: Option<String>,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            session_file: None,
            verbose: false,
            log_json: false,
        }
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub session_file: Option<String>,
    pub verbose: bool,
    pub log_json: bool,
}

impl Settings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        let defaults = Settings::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            api_url: overrides
                .api_url
                .or(file.api.url)
                .unwrap_or(defaults.api_url),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.api.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            session_file: overrides.session_file.or(file.session.file),
            verbose: overrides.verbose || file.logging.verbose.unwrap_or(false),
            log_json: overrides.log_json || file.logging.json.unwrap_or(false),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn session_file(&self) -> Option<&str> {
        self.session_file.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        if let Some(path) = &self.session_file {
            validation::validate_path("session_file", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, Overrides::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_url(), "https://api-laamsa-form.vercel.app");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[api]
url = "https://from-file.example.com"
timeout_seconds = 10

[session]
file = "/tmp/from-file.json"
"#,
        )
        .unwrap();

        let settings = Settings::resolve(
            Some(&file),
            Overrides {
                api_url: Some("http://localhost:3000".to_string()),
                ..Overrides::default()
            },
        );
        assert_eq!(settings.api_url, "http://localhost:3000");
        assert_eq!(settings.timeout_seconds, 10);
        assert_eq!(settings.session_file(), Some("/tmp/from-file.json"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let settings = Settings {
            api_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            session_file: Some(String::new()),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}

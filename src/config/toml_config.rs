use crate::utils::error::{AdminError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

/// Optional configuration file; every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdminError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AdminError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
url = "https://api.example.com"
timeout_seconds = 15

[session]
file = "/tmp/laamsa/session.json"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.api.timeout_seconds, Some(15));
        assert_eq!(config.session.file.as_deref(), Some("/tmp/laamsa/session.json"));
        assert_eq!(config.logging.json, Some(true));
        assert_eq!(config.logging.verbose, None);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.url.is_none());
        assert!(config.session.file.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LAAMSA_TEST_API_URL", "https://staging.example.com");

        let toml_content = r#"
[api]
url = "${LAAMSA_TEST_API_URL}"

[session]
file = "${LAAMSA_TEST_UNSET_VAR}/session.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.url.as_deref(), Some("https://staging.example.com"));
        assert_eq!(
            config.session.file.as_deref(),
            Some("${LAAMSA_TEST_UNSET_VAR}/session.json")
        );

        std::env::remove_var("LAAMSA_TEST_API_URL");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[api\nurl = 1").unwrap_err();
        match &err {
            AdminError::ConfigError { message } => {
                assert!(message.starts_with("TOML parsing error"))
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
        assert_eq!(err.severity(), crate::utils::error::ErrorSeverity::High);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nurl = \"http://127.0.0.1:9000\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.url.as_deref(), Some("http://127.0.0.1:9000"));
    }
}

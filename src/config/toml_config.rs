use crate::config::{DEFAULT_DOMAINS_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SCHEME};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, WurError};
use crate::utils::validation::{validate_provider, Validate};
use serde::Deserialize;
use std::path::Path;

/// Run settings loaded from a TOML file. Every section is optional.
///
/// ```toml
/// [input]
/// domains_file = "domains.txt"
///
/// [output]
/// dir = "reports"
///
/// [http]
/// scheme = "https"
/// timeout_seconds = 30
/// concurrent_requests = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub domains_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            domains_file: DEFAULT_DOMAINS_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub scheme: String,
    pub timeout_seconds: Option<u64>,
    pub concurrent_requests: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            timeout_seconds: None,
            concurrent_requests: 1,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| WurError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WurError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| WurError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn domains_file(&self) -> &str {
        &self.input.domains_file
    }

    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn scheme(&self) -> &str {
        &self.http.scheme
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.http.timeout_seconds
    }

    fn concurrent_requests(&self) -> usize {
        self.http.concurrent_requests
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
domains_file = "targets.txt"

[output]
dir = "./out"

[http]
scheme = "http"
timeout_seconds = 20
concurrent_requests = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.domains_file(), "targets.txt");
        assert_eq!(config.output_dir(), "./out");
        assert_eq!(config.scheme(), "http");
        assert_eq!(config.timeout_seconds(), Some(20));
        assert_eq!(config.concurrent_requests(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.domains_file(), "domains.txt");
        assert_eq!(config.output_dir(), "reports");
        assert_eq!(config.scheme(), "https");
        assert_eq!(config.concurrent_requests(), 1);
        assert_eq!(config.timeout_seconds(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WUR_TEST_REPORT_DIR", "/tmp/wur-reports");

        let toml_content = r#"
[output]
dir = "${WUR_TEST_REPORT_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_dir(), "/tmp/wur-reports");

        std::env::remove_var("WUR_TEST_REPORT_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[http]
scheme = "gopher"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str("[http]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[http\nscheme = ").unwrap_err();
        assert!(matches!(err, WurError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\ndomains_file = \"sites.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.domains_file(), "sites.txt");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WurError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot read domain list '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write report file '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Malformed API response: {message}")]
    MalformedResponseError { message: String },

    #[error("Cannot build request target for '{domain}': {reason}")]
    InvalidTargetError { domain: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl WurError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WurError::ApiError(_)
            | WurError::HttpStatusError { .. }
            | WurError::InvalidTargetError { .. } => ErrorCategory::Network,
            WurError::CsvError(_)
            | WurError::SerializationError(_)
            | WurError::MalformedResponseError { .. } => ErrorCategory::Data,
            WurError::ConfigError { .. }
            | WurError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WurError::IoError(_) | WurError::InputFileError { .. } | WurError::OutputError { .. } => {
                ErrorCategory::Io
            }
        }
    }

    /// 單一網域的失敗只屬於 Medium，不會中斷整個執行
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WurError::ApiError(_)
            | WurError::HttpStatusError { .. }
            | WurError::MalformedResponseError { .. }
            | WurError::InvalidTargetError { .. } => ErrorSeverity::Medium,
            WurError::ConfigError { .. }
            | WurError::InvalidConfigValueError { .. }
            | WurError::InputFileError { .. }
            | WurError::SerializationError(_) => ErrorSeverity::High,
            WurError::CsvError(_) | WurError::IoError(_) | WurError::OutputError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Exit status used by the binary for a fatal error of this kind.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WurError::InputFileError { path, .. } => {
                format!("Domain list '{}' could not be read", path)
            }
            WurError::OutputError { path, .. } => {
                format!("Report file '{}' could not be written", path)
            }
            WurError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            WurError::ConfigError { message } => format!("Configuration problem: {}", message),
            WurError::HttpStatusError { status, url } => {
                format!("{} answered with HTTP {}", url, status)
            }
            WurError::ApiError(_) => "A site could not be reached".to_string(),
            WurError::MalformedResponseError { .. } | WurError::SerializationError(_) => {
                "A site returned data that is not a user list".to_string()
            }
            WurError::InvalidTargetError { domain, .. } => {
                format!("'{}' is not a valid domain", domain)
            }
            WurError::CsvError(_) | WurError::IoError(_) => {
                "Writing the reports failed".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the domain spelling and that the site exposes /wp-json/wp/v2/users/"
            }
            ErrorCategory::Data => "The site may have disabled or altered its REST API",
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
            ErrorCategory::Io => match self {
                WurError::InputFileError { .. } => {
                    "Create the domain list file with one bare domain per line"
                }
                _ => "Make sure the output directory is writable and the disk is not full",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, WurError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_error_is_fatal_with_exit_code_1() {
        let err = WurError::InputFileError {
            path: "domains.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("domains.txt"));
        assert!(err.recovery_suggestion().contains("domain list"));
    }

    #[test]
    fn test_output_error_is_critical() {
        let err = WurError::OutputError {
            path: "reports/wur-report.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_http_status_error_is_network() {
        let err = WurError::HttpStatusError {
            status: 404,
            url: "https://example.com/wp-json/wp/v2/users/".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("404"));
    }
}

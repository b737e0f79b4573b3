use crate::utils::error::{Result, WurError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_scheme(field_name: &str, scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(WurError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "Unsupported URL scheme, expected http or https".to_string(),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(WurError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WurError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(WurError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WurError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Shared checks for anything implementing `ConfigProvider`.
pub fn validate_provider<C: crate::domain::ports::ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("input", config.domains_file())?;
    validate_path("output_dir", config.output_dir())?;
    validate_scheme("scheme", config.scheme())?;
    validate_positive_number("concurrent_requests", config.concurrent_requests(), 1)?;
    if let Some(timeout) = config.timeout_seconds() {
        validate_range("timeout_seconds", timeout, 1, 600)?;
    }
    Ok(())
}

use crate::utils::error::{ConfigError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> std::result::Result<(), ConfigError> {
    if url_str.trim().is_empty() {
        return Err(ConfigError::Missing {
            field: field_name.to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_range(
    field_name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<(), ConfigError> {
    // rejects NaN too
    if !(min..=max).contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> std::result::Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(field_name, value, "Value must be a positive number"));
    }
    Ok(())
}

pub fn validate_min_u64(
    field_name: &str,
    value: u64,
    min_value: u64,
) -> std::result::Result<(), ConfigError> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

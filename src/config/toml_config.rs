use crate::core::ConfigProvider;
use crate::domain::model::{
    ReferencePoint, DEFAULT_REFERENCE_LATITUDE, DEFAULT_REFERENCE_LONGITUDE, EARTH_RADIUS_METERS,
};
use crate::utils::error::{ConfigError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://s3.amazonaws.com/intercom-take-home-test/customers.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub reference: ReferenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub earth_radius_meters: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_REFERENCE_LATITUDE,
            longitude: DEFAULT_REFERENCE_LONGITUDE,
            earth_radius_meters: EARTH_RADIUS_METERS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config = toml::from_str(&processed_content).map_err(|e| ConfigError::Parse {
            message: format!("TOML parsing error: {}", e),
        })?;

        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint {
            latitude: self.reference.latitude,
            longitude: self.reference.longitude,
            earth_radius_meters: self.reference.earth_radius_meters,
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.source.headers
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_min_u64("source.timeout_seconds", timeout, 1)?;
        }

        validation::validate_range("reference.latitude", self.reference.latitude, -90.0, 90.0)?;
        validation::validate_range(
            "reference.longitude",
            self.reference.longitude,
            -180.0,
            180.0,
        )?;
        validation::validate_positive(
            "reference.earth_radius_meters",
            self.reference.earth_radius_meters,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();

        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.reference_point(), ReferencePoint::default());
        assert_eq!(config.request_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
endpoint = "https://data.example.com/customers.txt"
timeout_seconds = 10

[source.headers]
x-api-key = "abc"

[reference]
latitude = 51.5
longitude = -0.12

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://data.example.com/customers.txt");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.headers().get("x-api-key").unwrap(), "abc");

        let reference = config.reference_point();
        assert_eq!(reference.latitude, 51.5);
        assert_eq!(reference.longitude, -0.12);
        assert_eq!(reference.earth_radius_meters, EARTH_RADIUS_METERS);

        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CUSTOMER_GEO_TEST_ENDPOINT", "https://test.example.com/c.txt");

        let toml_content = r#"
[source]
endpoint = "${CUSTOMER_GEO_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "https://test.example.com/c.txt");

        std::env::remove_var("CUSTOMER_GEO_TEST_ENDPOINT");
    }

    #[test]
    fn test_unknown_env_var_is_left_alone() {
        let toml_content = r#"
[source]
endpoint = "${CUSTOMER_GEO_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "${CUSTOMER_GEO_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let invalid_url =
            TomlConfig::from_toml_str("[source]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(invalid_url.validate().is_err());

        let bad_latitude = TomlConfig::from_toml_str("[reference]\nlatitude = 91.0\n").unwrap();
        assert!(bad_latitude.validate().is_err());

        let bad_radius =
            TomlConfig::from_toml_str("[reference]\nearth_radius_meters = 0.0\n").unwrap();
        assert!(bad_radius.validate().is_err());

        let bad_timeout = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(TomlConfig::from_toml_str("[source\nendpoint = 1").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
endpoint = "https://file.example.com/customers.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.endpoint(), "https://file.example.com/customers.txt");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, crate::utils::error::AppError::Io(_)));
    }
}

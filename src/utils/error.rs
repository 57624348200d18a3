use thiserror::Error;

/// Failure retrieving the raw dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport failure fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} fetching {url}")]
    BadStatus { url: String, status: u16 },
}

/// Failure decoding a single dataset line into a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Malformed JSON: {reason}")]
    MalformedJson { reason: String },

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Field '{field}' is not a valid number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' must be non-empty text")]
    InvalidText { field: &'static str },
}

/// Rejected sort criteria. Raised before any ordering happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Unknown sort field '{field}'")]
    UnknownField { field: String },

    #[error("Unknown sort direction '{direction}' (expected asc or desc)")]
    UnknownDirection { direction: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration field: {field}")]
    Missing { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    Parse { message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Fetch(_) => ErrorSeverity::Medium,
            AppError::Config(_) | AppError::Serialization(_) | AppError::Csv(_) => {
                ErrorSeverity::High
            }
            AppError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Fetch(FetchError::Transport { .. }) => {
                "Check network connectivity and the configured endpoint"
            }
            AppError::Fetch(FetchError::BadStatus { .. }) => {
                "Verify the dataset URL is correct and publicly readable"
            }
            AppError::Config(_) => "Fix the configuration file or command line arguments",
            AppError::Io(_) => "Check file paths and permissions",
            AppError::Serialization(_) | AppError::Csv(_) => "Retry with a different output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

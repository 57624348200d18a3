use crate::domain::model::{CustomerRecord, ReferencePoint};
use crate::utils::error::{FetchError, ParseError, SortError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Where the raw line-delimited payload comes from.
pub trait DatasetSource: Send + Sync {
    fn location(&self) -> &str;

    fn fetch(&self) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Conditions the pipeline recovers from but still needs to report.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    FetchTransport { url: String, reason: String },
    FetchStatus { url: String, status: u16 },
    RecordRejected {
        line_number: usize,
        line: String,
        error: ParseError,
    },
    InvalidSortCriteria { error: SortError },
}

impl From<&FetchError> for Diagnostic {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Transport { url, source } => Diagnostic::FetchTransport {
                url: url.clone(),
                reason: source.to_string(),
            },
            FetchError::BadStatus { url, status } => Diagnostic::FetchStatus {
                url: url.clone(),
                status: *status,
            },
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn reference_point(&self) -> ReferencePoint;
    fn request_timeout(&self) -> Option<Duration>;
    fn headers(&self) -> &HashMap<String, String>;
}

/// Read access to the customer dataset.
///
/// Failures never surface here: they are reported to the diagnostic sink and
/// the caller sees an empty result.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn fetch_all(
        &self,
        field: Option<&str>,
        direction: Option<&str>,
    ) -> Vec<CustomerRecord>;

    async fn fetch(&self, id: i64) -> Option<CustomerRecord>;
}

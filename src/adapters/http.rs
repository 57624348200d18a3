use crate::domain::ports::{ConfigProvider, DatasetSource};
use crate::utils::error::FetchError;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;

/// Fetches the dataset over HTTP(S). Anything but `200 OK` is a failure and
/// the body is discarded. No retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout: None,
            headers: HashMap::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            url: config.endpoint().to_string(),
            timeout: config.request_timeout(),
            headers: config.headers().clone(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

impl DatasetSource for HttpFetcher {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let mut request = self.client.get(&self.url);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Fetching customer dataset from: {}", self.url);

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!("Dataset response status: {}", status);

        if status != StatusCode::OK {
            return Err(FetchError::BadStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!("Fetched {} bytes", body.len());

        Ok(body)
    }
}

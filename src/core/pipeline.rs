use crate::adapters::{HttpFetcher, TracingSink};
use crate::core::parser::RecordParser;
use crate::core::sort;
use crate::domain::model::{CustomerRecord, ReferencePoint, SortCriteria};
use crate::domain::ports::{
    ConfigProvider, CustomerRepository, DatasetSource, Diagnostic, DiagnosticSink,
};

/// Fetch → parse → sort facade over the remote customer dataset.
///
/// This is the only layer that recovers from errors: fetch failures and bad
/// sort criteria yield an empty list, bad lines are skipped. Every recovered
/// condition is reported to the diagnostic sink.
pub struct CustomerPipeline<S: DatasetSource, D: DiagnosticSink = TracingSink> {
    source: S,
    parser: RecordParser,
    diagnostics: D,
}

impl CustomerPipeline<HttpFetcher, TracingSink> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            HttpFetcher::from_config(config),
            config.reference_point(),
            TracingSink,
        )
    }
}

impl<S: DatasetSource, D: DiagnosticSink> CustomerPipeline<S, D> {
    pub fn new(source: S, reference: ReferencePoint, diagnostics: D) -> Self {
        Self {
            source,
            parser: RecordParser::new(reference),
            diagnostics,
        }
    }

    /// Fetches and parses the whole dataset in source order.
    ///
    /// Returns `None` when the fetch itself failed.
    pub async fn load(&self) -> Option<Vec<CustomerRecord>> {
        tracing::debug!("Loading customers from: {}", self.source.location());

        match self.source.fetch().await {
            Ok(payload) => Some(self.parse_payload(&payload)),
            Err(e) => {
                self.diagnostics.report(Diagnostic::from(&e));
                None
            }
        }
    }

    /// Parses every non-empty line, skipping and reporting the ones that fail.
    pub fn parse_payload(&self, payload: &str) -> Vec<CustomerRecord> {
        let mut customers = Vec::new();
        let mut rejected = 0usize;

        for (index, line) in payload.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.parser.parse(line) {
                Ok(customer) => customers.push(customer),
                Err(error) => {
                    rejected += 1;
                    self.diagnostics.report(Diagnostic::RecordRejected {
                        line_number: index + 1,
                        line: line.to_string(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            "Parsed {} customers ({} rejected)",
            customers.len(),
            rejected
        );

        customers
    }

    /// Fetches all customers, ordered by `criteria` when given.
    pub async fn fetch_sorted(&self, criteria: Option<SortCriteria>) -> Vec<CustomerRecord> {
        let Some(customers) = self.load().await else {
            return Vec::new();
        };

        match criteria {
            Some(criteria) => sort::sort(&customers, criteria),
            None => customers,
        }
    }
}

#[async_trait::async_trait]
impl<S: DatasetSource, D: DiagnosticSink> CustomerRepository for CustomerPipeline<S, D> {
    async fn fetch_all(
        &self,
        field: Option<&str>,
        direction: Option<&str>,
    ) -> Vec<CustomerRecord> {
        // criteria are checked before fetching; invalid ones never hit the network
        let criteria = match SortCriteria::resolve(field, direction) {
            Ok(criteria) => criteria,
            Err(error) => {
                self.diagnostics
                    .report(Diagnostic::InvalidSortCriteria { error });
                return Vec::new();
            }
        };

        self.fetch_sorted(criteria).await
    }

    async fn fetch(&self, id: i64) -> Option<CustomerRecord> {
        self.load()
            .await?
            .into_iter()
            .find(|customer| customer.id() == id)
    }
}

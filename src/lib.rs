pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::TomlConfig;

pub use crate::adapters::{HttpFetcher, MemorySink, TracingSink};
pub use crate::core::pipeline::CustomerPipeline;
pub use crate::domain::model::{
    CustomerRecord, Direction, FieldName, ReferencePoint, SortCriteria,
};
pub use crate::domain::ports::{CustomerRepository, DatasetSource, Diagnostic, DiagnosticSink};
pub use crate::utils::error::{AppError, FetchError, ParseError, Result, SortError};

pub mod geo;
pub mod parser;
pub mod pipeline;
pub mod sort;

pub use crate::domain::model::{CustomerRecord, Direction, FieldName, ReferencePoint, SortCriteria};
pub use crate::domain::ports::{ConfigProvider, CustomerRepository, DatasetSource, DiagnosticSink};
pub use crate::utils::error::Result;

// Adapters layer: concrete implementations of the domain ports.

pub mod diagnostics;
pub mod http;

pub use diagnostics::{MemorySink, TracingSink};
pub use http::HttpFetcher;

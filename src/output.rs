use crate::domain::model::CustomerRecord;
use crate::utils::error::{AppError, Result};

/// How the CLI renders the customer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub fn render(customers: &[CustomerRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(customers)?),
        OutputFormat::Csv => render_csv(customers),
    }
}

fn render_csv(customers: &[CustomerRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // header row even for an empty list
    if customers.is_empty() {
        writer.write_record(["id", "name", "latitude", "longitude", "distance"])?;
    }
    for customer in customers {
        writer.serialize(customer)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

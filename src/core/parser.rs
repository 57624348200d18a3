use crate::domain::model::{CustomerRecord, ReferencePoint};
use crate::utils::error::ParseError;
use serde_json::{Map, Value};

/// Decodes one line of the customer dataset into a [`CustomerRecord`].
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    reference: ReferencePoint,
}

impl RecordParser {
    pub fn new(reference: ReferencePoint) -> Self {
        Self { reference }
    }

    pub fn parse(&self, line: &str) -> Result<CustomerRecord, ParseError> {
        let value: Value = serde_json::from_str(line).map_err(|e| ParseError::MalformedJson {
            reason: e.to_string(),
        })?;

        let Value::Object(obj) = value else {
            return Err(ParseError::MalformedJson {
                reason: "expected a JSON object".to_string(),
            });
        };

        let id = integer_field(&obj, "user_id")?;
        let name = text_field(&obj, "name")?;
        let latitude = float_field(&obj, "latitude")?;
        let longitude = float_field(&obj, "longitude")?;

        Ok(CustomerRecord::new(
            id,
            name,
            latitude,
            longitude,
            None,
            &self.reference,
        ))
    }
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ParseError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn integer_field(obj: &Map<String, Value>, field: &'static str) -> Result<i64, ParseError> {
    let value = required(obj, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn text_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, ParseError> {
    match required(obj, field)? {
        Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ParseError::InvalidText { field }),
    }
}

// coordinates arrive as either strings or numbers
fn float_field(obj: &Map<String, Value>, field: &'static str) -> Result<f64, ParseError> {
    let value = required(obj, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

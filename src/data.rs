use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Longest review body we will render, in characters.
pub const TEXT_LIMIT: usize = 800;

/// One review as it arrives from the wire. Every field is optional;
/// display defaults are resolved by the accessor methods, not by serde.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRecord {
    pub name: Option<String>,
    pub rating: Option<Value>,
    pub date: Option<String>,
    pub text: Option<String>,
    pub business: Option<String>,
    pub city: Option<String>,
    pub price: Option<String>,
}

impl ReviewRecord {
    /// Display name, falling back to "Anonymous" when absent or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Anonymous",
        }
    }

    /// Star count for display: rating coerced to a number, rounded to the
    /// nearest integer and clamped to 0..=5.
    pub fn stars(&self) -> usize {
        let raw = match &self.rating {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            Some(Value::Bool(b)) => *b as u8 as f64,
            _ => 0.0,
        };
        raw.round().clamp(0.0, 5.0) as usize
    }

    /// The raw rating for the parenthetical label, `?` when absent.
    pub fn rating_label(&self) -> String {
        match &self.rating {
            None | Some(Value::Null) => "?".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Review body cut down to [`TEXT_LIMIT`] characters.
    pub fn body(&self) -> String {
        match &self.text {
            Some(text) => text.chars().take(TEXT_LIMIT).collect(),
            None => String::new(),
        }
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn business(&self) -> &str {
        self.business.as_deref().unwrap_or("")
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    pub fn price(&self) -> &str {
        self.price.as_deref().unwrap_or("")
    }
}

/// Why a payload does not count as review data. Every variant lands on the
/// informational "no reviews" outcome, never on the hard-failure one.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("payload has no `reviews` key")]
    MissingReviews,
    #[error("`reviews` is not an array")]
    NotAnArray,
    #[error("`reviews` array is empty")]
    Empty,
    #[error("review at index {index} is malformed: {source}")]
    BadRecord {
        index: usize,
        source: serde_json::Error,
    },
}

/// Check the document shape and pull the records out of it.
///
/// Expected shape: an object with a non-empty array at `reviews`.
pub fn validate(payload: Value) -> Result<Vec<ReviewRecord>, ShapeError> {
    let Value::Object(mut doc) = payload else {
        return Err(ShapeError::NotAnObject);
    };
    let Some(reviews) = doc.remove("reviews") else {
        return Err(ShapeError::MissingReviews);
    };
    let Value::Array(items) = reviews else {
        return Err(ShapeError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ShapeError::Empty);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| ShapeError::BadRecord { index, source })
        })
        .collect()
}

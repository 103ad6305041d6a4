use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Candidate keys for a topic's text, in lookup order.
pub const TEXT_FIELDS: [&str; 3] = ["topic", "name", "industry"];

static NULL_ID: Value = Value::Null;

/// One row of the input table, kept exactly as the store returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicRow(Map<String, Value>);

impl TopicRow {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The row's opaque identifier, or JSON null when the row has none.
    #[must_use]
    pub fn id(&self) -> &Value {
        self.0.get("id").unwrap_or(&NULL_ID)
    }

    /// Resolve the topic text by trying each of [`TEXT_FIELDS`] in order.
    ///
    /// Returns the first field that holds a non-empty string. Fields holding
    /// an empty string, null, or a non-string value are passed over.
    #[must_use]
    pub fn resolve_text(&self) -> Option<&str> {
        TEXT_FIELDS.iter().find_map(|key| {
            self.0
                .get(*key)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Display adapter for the id that prints string ids without quotes.
    #[must_use]
    pub fn display_id(&self) -> DisplayId<'_> {
        DisplayId(self.id())
    }
}

pub struct DisplayId<'a>(&'a Value);

impl fmt::Display for DisplayId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

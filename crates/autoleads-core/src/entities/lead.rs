use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile of the prospect a lead email is aimed at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadProfile {
    pub role: Option<String>,
    pub primary_challenge: Option<String>,
    /// Kept as raw JSON: the generator sends either a number or a string.
    pub predicted_annual_revenue_usd: Option<Value>,
}

/// Structured lead content produced by the generation API.
///
/// Every field is optional. A field that is absent, null, or of an unexpected
/// JSON type is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLead {
    pub subject: Option<String>,
    pub body_html: Option<String>,
    pub value_proposition: Option<String>,
    pub lead_profile: Option<LeadProfile>,
}

impl GeneratedLead {
    /// Read the known fields out of an opaque `generated_data` payload.
    ///
    /// Never fails: a payload that is not an object yields an empty lead.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let lead_profile = payload
            .get("lead_profile")
            .filter(|profile| profile.is_object())
            .map(|profile| LeadProfile {
                role: string_field(profile, "role"),
                primary_challenge: string_field(profile, "primary_challenge"),
                predicted_annual_revenue_usd: profile
                    .get("predicted_annual_revenue_usd")
                    .filter(|value| !value.is_null())
                    .cloned(),
            });

        Self {
            subject: string_field(payload, "subject"),
            body_html: string_field(payload, "body_html"),
            value_proposition: string_field(payload, "value_proposition"),
            lead_profile,
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// What happened when a topic was sent to the generator.
///
/// A record is saved for success XOR failure, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadOutcome {
    Generated(GeneratedLead),
    Failed(String),
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::{LeadOutcome, TopicRow};
use crate::enums::LeadStatus;

/// One row of the output table. Created once per processed topic and never
/// updated afterwards.
///
/// Field names are the output table's column names. Absent values serialize
/// as explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    pub id: Uuid,
    pub source_topic_id: Value,
    pub source_topic: String,
    pub subject: Option<String>,
    pub body_html: Option<String>,
    pub value_proposition: Option<String>,
    pub lead_role: Option<String>,
    pub lead_challenge: Option<String>,
    pub lead_revenue: Option<Value>,
    pub status: LeadStatus,
    pub error_message: Option<String>,
}

impl ResultRecord {
    /// Flatten an outcome into a record with a fresh v4 id.
    #[must_use]
    pub fn new(source_topic_id: Value, source_topic: &str, outcome: &LeadOutcome) -> Self {
        let mut record = Self {
            id: Uuid::new_v4(),
            source_topic_id,
            source_topic: source_topic.to_string(),
            subject: None,
            body_html: None,
            value_proposition: None,
            lead_role: None,
            lead_challenge: None,
            lead_revenue: None,
            status: LeadStatus::Generated,
            error_message: None,
        };

        match outcome {
            LeadOutcome::Generated(lead) => {
                record.subject.clone_from(&lead.subject);
                record.body_html.clone_from(&lead.body_html);
                record.value_proposition.clone_from(&lead.value_proposition);
                if let Some(profile) = &lead.lead_profile {
                    record.lead_role.clone_from(&profile.role);
                    record.lead_challenge.clone_from(&profile.primary_challenge);
                    record
                        .lead_revenue
                        .clone_from(&profile.predicted_annual_revenue_usd);
                }
            }
            LeadOutcome::Failed(message) => {
                record.status = LeadStatus::Error;
                record.error_message = Some(message.clone());
            }
        }

        record
    }

    /// Build a record for a fetched row whose text has already been resolved.
    #[must_use]
    pub fn for_topic(topic: &TopicRow, text: &str, outcome: &LeadOutcome) -> Self {
        Self::new(topic.id().clone(), text, outcome)
    }
}

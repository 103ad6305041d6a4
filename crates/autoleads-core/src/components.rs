//! The three collaborators the pipeline drives.
//!
//! Each trait is infallible at its boundary: implementations contain their
//! own failures (log and return an empty list, a `Failure`, or `false`), so
//! the driver never has to decide whether an error should abort the run.

use std::future::Future;

use serde_json::Value;

use crate::entities::{GeneratedLead, LeadOutcome, ResultRecord, TopicRow};

/// Reads every row of the input table.
pub trait TopicSource {
    /// Fetch all topic rows. Returns an empty list on any failure.
    fn fetch_topics(&self) -> impl Future<Output = Vec<TopicRow>>;
}

/// Response of the generation API for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// `generated_data` from the response body, verbatim.
    Success(Value),
    /// Transport failure or a body with `success` not set.
    Failure(String),
}

impl Generation {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<Generation> for LeadOutcome {
    fn from(generation: Generation) -> Self {
        match generation {
            Generation::Success(payload) => Self::Generated(GeneratedLead::from_payload(&payload)),
            Generation::Failure(message) => Self::Failed(message),
        }
    }
}

/// Calls the remote generation API.
pub trait LeadGenerator {
    fn generate(&self, topic: &str) -> impl Future<Output = Generation>;
}

/// Appends result records to the output table.
pub trait ResultSink {
    /// Insert one record. Returns `false` when the store rejected it or could
    /// not be reached.
    fn save(&self, record: &ResultRecord) -> impl Future<Output = bool>;
}

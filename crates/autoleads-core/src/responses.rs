//! Response types printed by the `autoleads` binary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::Generation;
use crate::entities::TopicRow;
use crate::enums::TopicStage;

/// Tally of one pipeline run, returned by `autoleads run`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows taken from the topic source.
    pub total: usize,
    pub skipped: usize,
    pub generated: usize,
    pub generation_failed: usize,
    pub saved: usize,
    pub save_failed: usize,
    pub duration_ms: u64,
}

impl RunSummary {
    /// Count a topic entering `stage`.
    pub const fn record(&mut self, stage: TopicStage) {
        match stage {
            TopicStage::Fetched => self.total += 1,
            TopicStage::TextResolved => {}
            TopicStage::Skipped => self.skipped += 1,
            TopicStage::Generated => self.generated += 1,
            TopicStage::GenerationFailed => self.generation_failed += 1,
            TopicStage::Saved => self.saved += 1,
            TopicStage::SaveFailed => self.save_failed += 1,
        }
    }

    /// Number of result records the run tried to write.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.saved + self.save_failed
    }
}

/// One row of `autoleads topics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: Value,
    /// Resolved text; `None` means the driver would skip this row.
    pub text: Option<String>,
}

impl From<&TopicRow> for TopicEntry {
    fn from(row: &TopicRow) -> Self {
        Self {
            id: row.id().clone(),
            text: row.resolve_text().map(str::to_string),
        }
    }
}

/// Response from `autoleads topics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicListResponse {
    pub table: String,
    pub topics: Vec<TopicEntry>,
    pub resolvable: usize,
}

impl TopicListResponse {
    #[must_use]
    pub fn new(table: &str, rows: &[TopicRow]) -> Self {
        let topics: Vec<TopicEntry> = rows.iter().map(TopicEntry::from).collect();
        let resolvable = topics.iter().filter(|entry| entry.text.is_some()).count();
        Self {
            table: table.to_string(),
            topics,
            resolvable,
        }
    }
}

/// Response from `autoleads generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub topic: String,
    pub success: bool,
    pub generated_data: Option<Value>,
    pub message: Option<String>,
}

impl GenerateResponse {
    #[must_use]
    pub fn new(topic: &str, generation: Generation) -> Self {
        let (success, generated_data, message) = match generation {
            Generation::Success(payload) => (true, Some(payload), None),
            Generation::Failure(message) => (false, None, Some(message)),
        };
        Self {
            topic: topic.to_string(),
            success,
            generated_data,
            message,
        }
    }
}

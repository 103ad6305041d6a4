//! Status enums for autoleads.
//!
//! `LeadStatus` is written to the output table and uses the upper-case
//! spelling the table expects. `TopicStage` tracks one topic through the
//! pipeline and provides `allowed_next_states()` so the driver can only move
//! a topic along valid edges.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LeadStatus
// ---------------------------------------------------------------------------

/// Outcome column of a saved result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Generated,
    Error,
}

impl LeadStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "GENERATED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TopicStage
// ---------------------------------------------------------------------------

/// Processing stage of a single topic.
///
/// ```text
/// fetched → text_resolved → generated         → saved
///                         → generation_failed → save_failed
///         → skipped
/// ```
///
/// `skipped`, `saved` and `save_failed` are terminal. None of them stop the
/// run; they only end processing for that topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStage {
    Fetched,
    TextResolved,
    Skipped,
    Generated,
    GenerationFailed,
    Saved,
    SaveFailed,
}

impl TopicStage {
    /// Valid next stages from the current stage.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Fetched => &[Self::TextResolved, Self::Skipped],
            Self::TextResolved => &[Self::Generated, Self::GenerationFailed],
            Self::Generated => &[Self::Saved, Self::SaveFailed],
            Self::GenerationFailed => &[Self::Saved, Self::SaveFailed],
            Self::Skipped | Self::Saved | Self::SaveFailed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetched => "fetched",
            Self::TextResolved => "text_resolved",
            Self::Skipped => "skipped",
            Self::Generated => "generated",
            Self::GenerationFailed => "generation_failed",
            Self::Saved => "saved",
            Self::SaveFailed => "save_failed",
        }
    }
}

impl fmt::Display for TopicStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

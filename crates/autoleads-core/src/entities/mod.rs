//! Entity structs for autoleads.
//!
//! `TopicRow` maps to a row of the input table, `ResultRecord` to a row of the
//! output table. `GeneratedLead` is the ephemeral payload in between.

mod lead;
mod record;
mod topic;

pub use lead::{GeneratedLead, LeadOutcome, LeadProfile};
pub use record::ResultRecord;
pub use topic::{TEXT_FIELDS, TopicRow};

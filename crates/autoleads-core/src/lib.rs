//! # autoleads-core
//!
//! Core types and the batch pipeline for autoleads.
//!
//! This crate provides the pieces shared by every other autoleads crate:
//! - Entity structs for topic rows, generated leads, and result records
//! - Status enums, including the per-topic processing state machine
//! - The three component traits (`TopicSource`, `LeadGenerator`, `ResultSink`)
//! - The sequential driver that wires them together
//! - The run summary returned to the CLI

pub mod components;
pub mod entities;
pub mod enums;
pub mod pipeline;
pub mod responses;

pub use components::{Generation, LeadGenerator, ResultSink, TopicSource};
pub use entities::{GeneratedLead, LeadOutcome, LeadProfile, ResultRecord, TopicRow};
pub use enums::{LeadStatus, TopicStage};
pub use pipeline::{RunOptions, run_pipeline};
pub use responses::{GenerateResponse, RunSummary, TopicEntry, TopicListResponse};

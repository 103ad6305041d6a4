//! Sequential driver: fetch topics, generate one lead per topic, save each
//! outcome.
//!
//! Topics are processed one at a time in source order. No outcome of a single
//! topic stops the loop; every topic ends in one of the terminal stages of
//! [`TopicStage`] and the run always returns a [`RunSummary`].

use std::time::Instant;

use crate::components::{Generation, LeadGenerator, ResultSink, TopicSource};
use crate::entities::{LeadOutcome, ResultRecord, TEXT_FIELDS, TopicRow};
use crate::enums::TopicStage;
use crate::responses::RunSummary;

/// Knobs for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Process at most this many fetched rows.
    pub limit: Option<usize>,
}

/// Run the whole pipeline against the given collaborators.
pub async fn run_pipeline<S, G, K>(
    source: &S,
    generator: &G,
    sink: &K,
    options: RunOptions,
) -> RunSummary
where
    S: TopicSource,
    G: LeadGenerator,
    K: ResultSink,
{
    let started = Instant::now();
    let mut summary = RunSummary::default();

    let mut topics = source.fetch_topics().await;
    if let Some(limit) = options.limit {
        topics.truncate(limit);
    }

    if topics.is_empty() {
        tracing::warn!("No topics retrieved. Check the store connection and table name.");
    }

    for topic in &topics {
        let stage = process_topic(topic, generator, sink, &mut summary).await;
        debug_assert!(stage.is_terminal(), "topic left in non-terminal stage {stage}");
        tracing::debug!(topic_id = %topic.display_id(), %stage, "topic finished");
    }

    summary.duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        total = summary.total,
        skipped = summary.skipped,
        saved = summary.saved,
        save_failed = summary.save_failed,
        generation_failed = summary.generation_failed,
        "run complete"
    );
    summary
}

/// Drive one topic to a terminal stage.
async fn process_topic<G, K>(
    topic: &TopicRow,
    generator: &G,
    sink: &K,
    summary: &mut RunSummary,
) -> TopicStage
where
    G: LeadGenerator,
    K: ResultSink,
{
    let mut stage = TopicStage::Fetched;
    summary.record(stage);

    let text = topic.resolve_text();
    tracing::info!("------------------------------");
    tracing::info!(topic_id = %topic.display_id(), topic = ?text, "Processing topic");

    let Some(text) = text else {
        tracing::warn!(
            topic_id = %topic.display_id(),
            "Skipping topic: no text field found ({})",
            TEXT_FIELDS.join("/")
        );
        advance(&mut stage, TopicStage::Skipped, summary);
        return stage;
    };
    advance(&mut stage, TopicStage::TextResolved, summary);

    let generation = generator.generate(text).await;
    if let Generation::Failure(message) = &generation {
        tracing::warn!(topic_id = %topic.display_id(), error = %message, "Generation error");
        advance(&mut stage, TopicStage::GenerationFailed, summary);
    } else {
        advance(&mut stage, TopicStage::Generated, summary);
    }

    let record = ResultRecord::for_topic(topic, text, &LeadOutcome::from(generation));
    if sink.save(&record).await {
        advance(&mut stage, TopicStage::Saved, summary);
    } else {
        tracing::warn!(
            topic_id = %topic.display_id(),
            record_id = %record.id,
            "Saving the result failed"
        );
        advance(&mut stage, TopicStage::SaveFailed, summary);
    }
    stage
}

fn advance(stage: &mut TopicStage, next: TopicStage, summary: &mut RunSummary) {
    debug_assert!(stage.can_transition_to(next), "invalid stage transition {stage} -> {next}");
    *stage = next;
    summary.record(next);
}

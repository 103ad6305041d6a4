use std::fmt::Write as _;

use autoleads_core::{GenerateResponse, RunSummary, TopicListResponse};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Human-readable rendering for `--format text`.
pub trait TextOutput {
    fn to_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextOutput>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.to_text()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextOutput>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

impl TextOutput for RunSummary {
    fn to_text(&self) -> String {
        format!(
            "Processed {} topics in {} ms: {} saved, {} save failures, {} generation errors, {} skipped",
            self.total,
            self.duration_ms,
            self.saved,
            self.save_failed,
            self.generation_failed,
            self.skipped
        )
    }
}

impl TextOutput for TopicListResponse {
    fn to_text(&self) -> String {
        let mut out = format!(
            "{} topics in '{}' ({} with text)\n",
            self.topics.len(),
            self.table,
            self.resolvable
        );
        for entry in &self.topics {
            let id = entry
                .id
                .as_str()
                .map_or_else(|| entry.id.to_string(), str::to_string);
            let _ = match &entry.text {
                Some(text) => writeln!(out, "  {id}\t{text}"),
                None => writeln!(out, "  {id}\t(no text field, would be skipped)"),
            };
        }
        out.trim_end().to_string()
    }
}

impl TextOutput for GenerateResponse {
    fn to_text(&self) -> String {
        if self.success {
            let payload = self
                .generated_data
                .as_ref()
                .and_then(|data| serde_json::to_string_pretty(data).ok())
                .unwrap_or_else(|| "null".to_string());
            format!("Generated lead for '{}':\n{payload}", self.topic)
        } else {
            format!(
                "Generation failed for '{}': {}",
                self.topic,
                self.message.as_deref().unwrap_or_default()
            )
        }
    }
}

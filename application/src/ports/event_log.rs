//! Port for the append-only merge event log.
//!
//! Defines the [`EventLog`] trait for recording state changes of the
//! registry (agent registration, submissions, merges, clears) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail that other tools can replay (JSONL).

use merge_domain::core::string::preview;
use merge_domain::{Agent, Contribution, MergeResult};
use serde_json::{Value, json};

/// Characters of contribution text kept in `content_preview`
pub const CONTENT_PREVIEW_CHARS: usize = 100;

/// Characters of merged content kept in `result_preview`
pub const RESULT_PREVIEW_CHARS: usize = 200;

/// A structured registry event.
///
/// The sink adds `event`, `ts_ms` and `source`; the payload carries the
/// event-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    /// Dotted event name (e.g., "agent.registered", "merge.completed").
    pub name: &'static str,
    /// JSON object with event-specific data.
    pub payload: Value,
}

impl MergeEvent {
    pub const AGENT_REGISTERED: &'static str = "agent.registered";
    pub const CONTRIBUTION_SUBMITTED: &'static str = "contribution.submitted";
    pub const MERGE_COMPLETED: &'static str = "merge.completed";
    pub const SUBSET_MERGE_COMPLETED: &'static str = "merge.subset_completed";
    pub const CONTRIBUTIONS_CLEARED: &'static str = "contributions.cleared";

    pub fn new(name: &'static str, payload: Value) -> Self {
        Self { name, payload }
    }

    pub fn agent_registered(agent: &Agent, replaced: bool) -> Self {
        Self::new(
            Self::AGENT_REGISTERED,
            json!({
                "agent_id": agent.id,
                "agent_name": agent.name,
                "capabilities": agent.capabilities,
                "specialty": agent.specialty,
                "supported_modalities": agent.supported_modalities,
                "replaced": replaced,
            }),
        )
    }

    pub fn contribution_submitted(contribution: &Contribution) -> Self {
        let content = contribution.content();
        Self::new(
            Self::CONTRIBUTION_SUBMITTED,
            json!({
                "agent_id": contribution.agent_id(),
                "hash": contribution.hash(),
                "modality": contribution.modality(),
                "content_preview": preview(contribution.text_payload(), CONTENT_PREVIEW_CHARS),
                "timestamp": contribution.timestamp(),
                "has_text": content.text.is_some(),
                "has_image": content.image_path.is_some(),
                "has_audio": content.audio_path.is_some(),
                "has_video": content.video_path.is_some(),
            }),
        )
    }

    pub fn merge_completed(result: &MergeResult, input_count: usize) -> Self {
        let mut payload = json!({
            "strategy": result.strategy,
            "result_preview": preview(&result.merged_content, RESULT_PREVIEW_CHARS),
            "confidence_score": result.confidence_score,
            "contributing_agents": result.contributing_agents,
            "input_count": input_count,
        });
        if let (Some(modality), Value::Object(map)) = (result.output_modality, &mut payload) {
            map.insert("result_modality".to_string(), json!(modality));
        }
        Self::new(Self::MERGE_COMPLETED, payload)
    }

    pub fn subset_merge_completed(result: &MergeResult, selected_count: usize) -> Self {
        Self::new(
            Self::SUBSET_MERGE_COMPLETED,
            json!({
                "strategy": result.strategy,
                "selected_count": selected_count,
                "result_preview": preview(&result.merged_content, RESULT_PREVIEW_CHARS),
                "confidence_score": result.confidence_score,
            }),
        )
    }

    pub fn contributions_cleared(removed: usize) -> Self {
        Self::new(Self::CONTRIBUTIONS_CLEARED, json!({ "removed": removed }))
    }
}

/// Port for appending registry events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `append` is synchronous and non-fallible: a failed write must never
/// disrupt registration, submission or merging.
pub trait EventLog: Send + Sync {
    /// Record an event.
    fn append(&self, event: MergeEvent);
}

/// No-op implementation for tests and when the event log is disabled.
pub struct NoEventLog;

impl EventLog for NoEventLog {
    fn append(&self, _event: MergeEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use merge_domain::Modality;

    #[test]
    fn test_submitted_preview_is_truncated() {
        let text = "x".repeat(150);
        let contribution = Contribution::text("claude-001", &text, 0.9);
        let event = MergeEvent::contribution_submitted(&contribution);

        assert_eq!(event.name, "contribution.submitted");
        let preview = event.payload["content_preview"].as_str().unwrap();
        assert_eq!(preview, format!("{}...", "x".repeat(100)));
        assert_eq!(event.payload["modality"], "text");
        assert_eq!(event.payload["has_text"], true);
        assert_eq!(event.payload["has_image"], false);
    }

    #[test]
    fn test_merge_completed_includes_modality_when_known() {
        let plain = MergeResult::no_contributions("synthesis");
        let event = MergeEvent::merge_completed(&plain, 0);
        assert!(event.payload.get("result_modality").is_none());

        let multimodal = plain.with_output_modality(Modality::Image);
        let event = MergeEvent::merge_completed(&multimodal, 2);
        assert_eq!(event.payload["result_modality"], "image");
        assert_eq!(event.payload["input_count"], 2);
    }

    #[test]
    fn test_agent_registered_payload() {
        let agent = Agent::new("gpt-001", "GPT", 0.89)
            .with_capabilities(["code_generation"])
            .with_modalities([Modality::Text, Modality::Image]);
        let event = MergeEvent::agent_registered(&agent, false);

        assert_eq!(event.payload["agent_id"], "gpt-001");
        assert_eq!(
            event.payload["supported_modalities"],
            json!(["text", "image"])
        );
    }
}

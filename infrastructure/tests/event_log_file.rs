//! End-to-end: registry activity lands in the JSONL event log

use merge_application::{MergeRegistry, MergeSettings};
use merge_domain::{Agent, MergeStrategy, Modality};
use merge_infrastructure::{JsonlEventLog, SubmissionFile};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

fn read_events(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn registry_events_are_written_as_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("merge_events.jsonl");

    {
        let log = JsonlEventLog::new(&log_path, "ai_merge_system").unwrap();
        let registry = MergeRegistry::new(Arc::new(log));

        registry
            .register_agent(Agent::new("claude-001", "Claude", 0.92).with_specialty("Security"))
            .unwrap();
        registry
            .submit_text(
                "claude-001",
                "Hash every password with bcrypt before storing it.",
                Default::default(),
            )
            .unwrap();
        let result = registry.merge_all(&MergeStrategy::Synthesis, "Hash password before storing");
        assert!(result.has_contributions());
        registry.clear_contributions();
    }

    let events = read_events(&log_path);
    let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "agent.registered",
            "contribution.submitted",
            "merge.completed",
            "contributions.cleared",
        ]
    );
    for event in &events {
        assert_eq!(event["source"], "ai_merge_system");
        assert!(event["ts_ms"].as_i64().unwrap() > 0);
    }
    assert_eq!(events[0]["specialty"], "Security");
    assert_eq!(events[1]["modality"], "text");
    assert_eq!(events[2]["strategy"], "synthesis");
    assert_eq!(events[2]["input_count"], 1);
    assert_eq!(events[3]["removed"], 1);
}

#[test]
fn auto_merge_from_submission_file_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("events.jsonl");
    let image = dir.path().join("flow.png");
    std::fs::write(&image, vec![0u8; 2048]).unwrap();

    let submission = dir.path().join("batch.json");
    std::fs::write(
        &submission,
        r#"{
            "context": "login flow",
            "contributions": [
                { "agent_id": "gemini-001", "text": "The login flow should issue short lived tokens." },
                { "agent_id": "gemini-001", "image": "flow.png" }
            ]
        }"#,
    )
    .unwrap();

    {
        let log = JsonlEventLog::new(&log_path, "mm_ai_merge_system").unwrap();
        let settings = MergeSettings::default().with_auto_merge_threshold(2);
        let registry = MergeRegistry::with_settings(Arc::new(log), settings);
        registry
            .register_agent(
                Agent::new("gemini-001", "Gemini", 0.88)
                    .with_modalities([Modality::Text, Modality::Image]),
            )
            .unwrap();

        let file = SubmissionFile::load(&submission).unwrap();
        file.submit_all(&registry).unwrap();

        let auto = registry.last_auto_merge().unwrap();
        assert_eq!(auto.output_modality, Some(Modality::Image));
    }

    let events = read_events(&log_path);
    let merge = events
        .iter()
        .find(|e| e["event"] == "merge.completed")
        .unwrap();
    assert_eq!(merge["result_modality"], "image");
    assert_eq!(merge["source"], "mm_ai_merge_system");
    assert_eq!(events[2]["has_image"], true);
}

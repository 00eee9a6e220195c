//! JSONL file writer for registry events.
//!
//! Each [`MergeEvent`] is serialized as a single JSON line carrying `event`,
//! `ts_ms` and `source` next to the event payload, appended to the file via
//! a buffered writer.

use merge_application::ports::event_log::{EventLog, MergeEvent};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Source tag written when none is configured
pub const DEFAULT_SOURCE: &str = "ai_merge_system";

/// Append-only JSONL event log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line and on `Drop`.
pub struct JsonlEventLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    source: String,
}

impl JsonlEventLog {
    /// Open (or create) the log at `path` for appending.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, source: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn record(&self, event: MergeEvent) -> Value {
        let ts_ms = chrono::Utc::now().timestamp_millis();

        match event.payload {
            Value::Object(mut map) => {
                map.insert("event".to_string(), Value::String(event.name.to_string()));
                map.insert("ts_ms".to_string(), json!(ts_ms));
                map.insert("source".to_string(), Value::String(self.source.clone()));
                Value::Object(map)
            }
            other => json!({
                "event": event.name,
                "ts_ms": ts_ms,
                "source": self.source,
                "data": other,
            }),
        }
    }
}

impl EventLog for JsonlEventLog {
    fn append(&self, event: MergeEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Could not write event log {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlEventLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_event_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("events.jsonl");
        let log = JsonlEventLog::new(&path, DEFAULT_SOURCE).unwrap();

        log.append(MergeEvent::new(
            "agent.registered",
            json!({ "agent_id": "claude-001", "agent_name": "Claude" }),
        ));
        log.append(MergeEvent::contributions_cleared(3));
        drop(log);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line["ts_ms"].is_i64());
            assert_eq!(line["source"], "ai_merge_system");
        }
        assert_eq!(lines[0]["event"], "agent.registered");
        assert_eq!(lines[0]["agent_id"], "claude-001");
        assert_eq!(lines[1]["event"], "contributions.cleared");
        assert_eq!(lines[1]["removed"], 3);
    }

    #[test]
    fn test_event_log_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        for source in ["ai_merge_system", "mm_ai_merge_system"] {
            let log = JsonlEventLog::new(&path, source).unwrap();
            log.append(MergeEvent::contributions_cleared(0));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["source"], "mm_ai_merge_system");
    }

    #[test]
    fn test_event_log_wraps_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let log = JsonlEventLog::new(&path, "test").unwrap();

        log.append(MergeEvent::new("custom.note", json!("just a string")));
        drop(log);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["event"], "custom.note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_event_log_returns_none_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlEventLog::new(dir.path(), DEFAULT_SOURCE).is_none());
    }
}

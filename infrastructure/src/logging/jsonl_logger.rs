//! JSONL file writer for submission events.
//!
//! One line per [`SubmissionEvent`]:
//!
//! ```json
//! {"type":"agent_reply","timestamp":"2026-01-05T10:00:00.000Z","ticket_id":"…","text":"…"}
//! ```
//!
//! `type`, `timestamp` and `ticket_id` are always present (`ticket_id` is
//! null for local answers); the event's own fields follow.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use ticket_desk_application::ports::submission_logger::{SubmissionEvent, SubmissionLogger};
use tracing::warn;

/// Append-only JSONL transcript of submissions.
///
/// Each line goes out in a single `write_all`, so lines from concurrent
/// submissions never interleave.
pub struct JsonlSubmissionLogger {
    file: Mutex<File>,
}

impl JsonlSubmissionLogger {
    /// Open `path` for appending, creating parent directories as needed.
    ///
    /// Returns `None` if the file cannot be opened; submissions then run
    /// without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create submission log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(file),
            }),
            Err(e) => {
                warn!(
                    "Could not open submission log file {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Render one event as a JSONL record (without the newline)
    fn record(event: SubmissionEvent) -> Map<String, Value> {
        let mut record = event.fields;
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert(
            "timestamp".to_string(),
            Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        );
        record.insert(
            "ticket_id".to_string(),
            event
                .ticket_id
                .map_or(Value::Null, |id| Value::from(id.as_str())),
        );
        record
    }
}

impl SubmissionLogger for JsonlSubmissionLogger {
    fn log(&self, event: SubmissionEvent) {
        let Ok(mut line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };
        line.push('\n');

        if let Ok(mut file) = self.file.lock()
            && let Err(e) = file.write_all(line.as_bytes())
        {
            warn!("Could not write submission log entry: {}", e);
        }
    }
}

//! Session event publication.
//!
//! All incremental observability flows through `SessionEvent` values sent
//! over an unbounded channel: status line changes, per-result transitions
//! (each carrying a full snapshot of the changed result, so observers
//! never see a partially written record), progress updates and
//! user-facing notices. Send failures are ignored — a departed observer
//! is not an error.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::models::metadata::MetadataResult;

/// Event stream payload delivered to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum SessionEvent {
    /// Status line text ("Ready.", "Processing...", "Paused", "Complete!").
    Status { message: String },
    /// A batch was initialized; one pending result exists per input file.
    BatchStarted { total: usize },
    /// A result changed; `result` is a complete snapshot.
    ResultChanged {
        index: usize,
        result: MetadataResult,
    },
    /// Overall progress, 0-100.
    Progress { percent: u8 },
    /// Human-readable notification with a short title and description.
    Notice { title: String, description: String },
    /// The processing loop finished without being paused.
    BatchFinished { processed: usize, errored: usize },
}

/// Cloneable sender handle used by the engine and the session.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl EventSink {
    /// Create a sink and the receiving end the UI layer drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, event: SessionEvent) {
        let _ = self.tx.send(event);
    }

    pub fn status(&self, message: &str) {
        self.emit(SessionEvent::Status {
            message: message.to_string(),
        });
    }

    pub fn progress(&self, percent: u8) {
        self.emit(SessionEvent::Progress { percent });
    }

    pub fn result_changed(&self, index: usize, result: MetadataResult) {
        self.emit(SessionEvent::ResultChanged { index, result });
    }

    pub fn notice(&self, title: &str, description: &str) {
        self.emit(SessionEvent::Notice {
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

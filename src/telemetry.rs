//! Application telemetry events and sinks.
//!
//! Greenlight is a local-first tool, but it still benefits from lightweight
//! telemetry to capture operational signals — most importantly audit-log
//! write failures, which are recovered rather than surfaced to callers.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Greenlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records an audit-log append that failed and was swallowed.
    AuditWriteFailed {
        /// Action tag of the event that could not be recorded.
        action: String,
        /// Error detail from the failed append.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use super::{TelemetryEvent, TelemetrySink};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingSink::default();
        sink.record(TelemetryEvent::AuditWriteFailed {
            action: "PR_APPROVAL_SUCCESS".to_owned(),
            message: "disk full".to_owned(),
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::AuditWriteFailed {
                action: "PR_APPROVAL_SUCCESS".to_owned(),
                message: "disk full".to_owned(),
            }]
        );
    }
}
